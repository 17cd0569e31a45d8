pub mod config_show;
pub mod init;
pub mod wait;

pub use config_show::ConfigShow;
pub use init::Init;
pub use wait::Wait;

use trustctl_core::{Capability, HandlerRegistry};

/// The handler set shipped with the binary.
pub fn registry() -> HandlerRegistry {
    HandlerRegistry::new()
        .with(Capability::ConfigShow, ConfigShow)
        .with(Capability::Init, Init)
        .with(Capability::Wait, Wait)
}
