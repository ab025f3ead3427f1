pub mod fleet;
pub mod sched;
pub mod sim;

#[cfg(test)]
mod test;
