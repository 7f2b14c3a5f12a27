mod cinematic;
mod orbit;

pub use cinematic::create_cinematic_path;
pub use orbit::create_orbit_path;
