use crate::fleet::{Car, CarId, CarState, DispatchError, Direction};

fn car(max_floor: u32) -> Car {
    Car::new(CarId(1), max_floor, 10)
}

fn step_n(c: &mut Car, n: usize) {
    for _ in 0..n {
        c.step();
    }
}

#[test]
fn new_car_starts_idle_at_floor_one() {
    let c = car(10);
    assert_eq!(c.current_floor(), 1);
    assert_eq!(c.direction(), None);
    assert_eq!(c.state(), CarState::Idle);
    assert!(c.up_stops().is_empty());
    assert!(c.down_stops().is_empty());
    assert!(c.is_settled());
}

#[test]
fn add_stop_partitions_by_current_floor() {
    let mut c = car(10);
    assert!(c.add_stop(5).is_ok());
    assert!(c.up_stops().contains(&5));
    assert!(c.down_stops().is_empty());

    step_n(&mut c, 5);
    assert_eq!(c.current_floor(), 5);
    assert!(c.is_settled());

    assert!(c.add_stop(2).is_ok());
    assert!(c.down_stops().contains(&2));
    assert!(c.up_stops().is_empty());
}

#[test]
fn add_stop_rejects_out_of_range_floors() {
    let mut c = car(10);
    assert_eq!(
        c.add_stop(0),
        Err(DispatchError::OutOfRange {
            floor: 0,
            max_floor: 10
        })
    );
    assert_eq!(
        c.add_stop(11),
        Err(DispatchError::OutOfRange {
            floor: 11,
            max_floor: 10
        })
    );
    assert!(c.up_stops().is_empty());
    assert!(c.down_stops().is_empty());
    assert_eq!(c.state(), CarState::Idle);
}

#[test]
fn add_stop_is_idempotent() {
    let mut c = car(10);
    assert!(c.add_stop(5).is_ok());
    assert!(c.add_stop(5).is_ok());
    assert_eq!(c.up_stops().len(), 1);

    step_n(&mut c, 5);
    assert!(c.is_settled());

    assert!(c.add_stop(3).is_ok());
    assert!(c.add_stop(3).is_ok());
    assert_eq!(c.down_stops().len(), 1);
    assert!(c.up_stops().is_empty());
}

#[test]
fn single_car_concrete_trace() {
    let mut c = car(10);
    assert!(c.add_stop(5).is_ok());
    assert!(c.add_stop(10).is_ok());

    step_n(&mut c, 4);
    assert_eq!(c.current_floor(), 5);
    assert_eq!(c.state(), CarState::DoorOpen);
    assert!(!c.up_stops().contains(&5));

    c.step();
    assert_eq!(c.current_floor(), 6);
    assert_eq!(c.state(), CarState::Moving);
    assert_eq!(c.direction(), Some(Direction::Up));

    step_n(&mut c, 4);
    assert_eq!(c.current_floor(), 10);
    assert_eq!(c.state(), CarState::DoorOpen);
    assert!(!c.is_settled());

    c.step();
    assert_eq!(c.state(), CarState::Idle);
    assert_eq!(c.direction(), None);
    assert!(c.is_settled());
}

#[test]
fn no_reversal_while_ascending_past_down_stop() {
    let mut c = car(10);
    assert!(c.add_stop(8).is_ok());
    step_n(&mut c, 2);
    assert_eq!(c.current_floor(), 3);

    assert!(c.add_stop(2).is_ok());
    assert!(c.down_stops().contains(&2));

    for _ in 0..5 {
        c.step();
        assert!(c.current_floor() > 2);
        if c.state() != CarState::DoorOpen {
            assert_eq!(c.direction(), Some(Direction::Up));
        }
    }
    assert_eq!(c.current_floor(), 8);
    assert_eq!(c.state(), CarState::DoorOpen);
    assert!(c.down_stops().contains(&2));

    step_n(&mut c, 6);
    assert_eq!(c.current_floor(), 2);
    assert_eq!(c.state(), CarState::DoorOpen);
    assert!(c.down_stops().is_empty());
}

#[test]
fn immediate_stop_at_current_floor_opens_door_without_moving() {
    let mut c = car(10);
    assert!(c.add_stop(1).is_ok());
    assert_eq!(c.current_floor(), 1);
    assert_eq!(c.state(), CarState::DoorOpen);
    assert!(c.up_stops().is_empty());
    assert!(c.down_stops().is_empty());

    c.step();
    assert_eq!(c.current_floor(), 1);
    assert_eq!(c.state(), CarState::Idle);
    assert!(c.is_settled());
}

#[test]
fn moving_car_ignores_request_for_floor_it_is_leaving() {
    let mut c = car(10);
    assert!(c.add_stop(5).is_ok());
    c.step();
    assert_eq!(c.current_floor(), 2);
    assert_eq!(c.state(), CarState::Moving);

    assert!(c.add_stop(2).is_ok());
    assert_eq!(c.state(), CarState::Moving);
    assert!(c.up_stops().contains(&5));
    assert!(c.down_stops().is_empty());
}

#[test]
fn out_of_service_drops_stops_and_rejects_new_ones() {
    let mut c = car(10);
    assert!(c.add_stop(5).is_ok());
    assert!(c.add_stop(9).is_ok());
    step_n(&mut c, 2);

    c.set_out_of_service();
    assert_eq!(c.state(), CarState::OutOfService);
    assert_eq!(c.direction(), None);
    assert!(c.up_stops().is_empty());
    assert!(c.down_stops().is_empty());
    assert!(!c.is_available());
    assert!(c.is_settled());

    assert_eq!(c.add_stop(4), Err(DispatchError::OutOfService(CarId(1))));

    let floor = c.current_floor();
    c.step();
    assert_eq!(c.current_floor(), floor);
    assert_eq!(c.state(), CarState::OutOfService);

    c.return_to_service();
    assert_eq!(c.state(), CarState::Idle);
    assert!(c.add_stop(4).is_ok());
}

#[test]
fn idle_car_with_both_sets_pending_goes_up_first() {
    let mut c = car(10);
    assert!(c.add_stop(5).is_ok());
    step_n(&mut c, 5);
    assert_eq!(c.current_floor(), 5);
    assert!(c.is_settled());

    assert!(c.add_stop(8).is_ok());
    assert!(c.add_stop(2).is_ok());

    c.step();
    assert_eq!(c.current_floor(), 6);
    assert_eq!(c.direction(), Some(Direction::Up));

    step_n(&mut c, 2);
    assert_eq!(c.current_floor(), 8);
    assert_eq!(c.state(), CarState::DoorOpen);

    step_n(&mut c, 6);
    assert_eq!(c.current_floor(), 2);
    assert_eq!(c.state(), CarState::DoorOpen);
}

#[test]
fn settles_within_two_max_floor_ticks() {
    let mut c = car(10);
    assert!(c.add_stop(10).is_ok());
    step_n(&mut c, 3);
    assert!(c.add_stop(2).is_ok());

    let mut ticks = 0;
    while !c.is_settled() {
        assert!(ticks < 20, "car did not settle within 2 * max_floor ticks");
        c.step();
        ticks += 1;
    }
    assert_eq!(c.current_floor(), 2);
}

#[test]
fn invariants_hold_at_every_tick() {
    let mut c = car(10);
    assert!(c.add_stop(10).is_ok());
    assert!(c.add_stop(4).is_ok());
    for i in 0..30 {
        c.step();
        assert!(c.current_floor() >= 1 && c.current_floor() <= 10);
        assert!(c.up_stops().intersection(c.down_stops()).next().is_none());
        if i == 10 {
            assert!(c.add_stop(1).is_ok());
        }
    }
    assert!(c.is_settled());
    assert_eq!(c.current_floor(), 1);
}

#[test]
fn board_and_alight_respect_the_occupant_counter() {
    let mut c = Car::new(CarId(1), 10, 2);
    assert!(c.board());
    assert!(c.board());
    assert!(!c.board());
    assert_eq!(c.occupancy(), 2);

    assert!(c.alight());
    assert!(c.alight());
    assert!(!c.alight());
    assert_eq!(c.occupancy(), 0);

    c.set_out_of_service();
    assert!(!c.board());
}
