// ── Checks ──
//
// Each check is an independent unit of work: obtain a session, fetch,
// normalize, report. Network calls inside one check are strictly sequential;
// the external scheduler runs checks concurrently across assets.

mod device;
mod system;

pub use device::check_device;
pub use system::check_system;
