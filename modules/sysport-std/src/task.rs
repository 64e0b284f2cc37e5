mod std_spawner;

pub use std_spawner::StdSpawner;
