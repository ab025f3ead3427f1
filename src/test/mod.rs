mod car;
