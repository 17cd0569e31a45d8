use crate::router::{Capability, Route};
use crate::trust_home::TrustHome;
use crate::{Error, ExitStatus, Result};
use std::collections::BTreeMap;
use std::io::Write;

/// Everything a handler may read about the invocation.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub trust_home: &'a TrustHome,
    /// Tokens after the command words.
    pub args: &'a [String],
    pub testing: bool,
}

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Get command name for logging
    fn name(&self) -> &'static str;

    /// Run the command, writing user-facing output to `out`.
    fn execute(&self, ctx: &HandlerContext<'_>, out: &mut dyn Write) -> Result<ExitStatus>;
}

/// Stand-in for a capability whose handler has not been built.
#[derive(Debug, Clone, Copy)]
pub struct NotImplemented(pub Capability);

impl CommandHandler for NotImplemented {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn execute(&self, _ctx: &HandlerContext<'_>, _out: &mut dyn Write) -> Result<ExitStatus> {
        Err(Error::NotImplemented(self.0.name()))
    }
}

/// Capability → handler table.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<Capability, Box<dyn CommandHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<H>(mut self, capability: Capability, handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        self.register(capability, handler);
        self
    }

    pub fn register<H>(&mut self, capability: Capability, handler: H)
    where
        H: CommandHandler + 'static,
    {
        self.handlers.insert(capability, Box::new(handler));
    }

    pub fn is_registered(&self, capability: Capability) -> bool {
        self.handlers.contains_key(&capability)
    }

    /// Name of the handler that would serve `capability`.
    pub fn handler_name(&self, capability: Capability) -> &'static str {
        match self.handlers.get(&capability) {
            Some(handler) => handler.name(),
            None => NotImplemented(capability).name(),
        }
    }

    /// Run the handler for `route`, falling back to [`NotImplemented`].
    pub fn dispatch(
        &self,
        route: &Route,
        ctx: &HandlerContext<'_>,
        out: &mut dyn Write,
    ) -> Result<ExitStatus> {
        match self.handlers.get(&route.capability) {
            Some(handler) => handler.execute(ctx, out),
            None => NotImplemented(route.capability).execute(ctx, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_home::TrustHomeSource;

    struct Fixed(ExitStatus);

    impl CommandHandler for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn execute(&self, ctx: &HandlerContext<'_>, out: &mut dyn Write) -> Result<ExitStatus> {
            writeln!(out, "{}", ctx.trust_home.value)?;
            Ok(self.0)
        }
    }

    fn home() -> TrustHome {
        TrustHome {
            value: "/th".to_string(),
            source: TrustHomeSource::Flag,
        }
    }

    fn route(capability: Capability) -> Route {
        Route {
            capability,
            args: Vec::new(),
        }
    }

    #[test]
    fn test_dispatch_to_registered_handler() {
        let registry = HandlerRegistry::new().with(Capability::Init, Fixed(ExitStatus::Ok));
        let th = home();
        let ctx = HandlerContext {
            trust_home: &th,
            args: &[],
            testing: false,
        };
        let mut out: Vec<u8> = Vec::new();
        let status = registry.dispatch(&route(Capability::Init), &ctx, &mut out).unwrap();
        assert_eq!(status, ExitStatus::Ok);
        assert_eq!(String::from_utf8(out).unwrap(), "/th\n");
    }

    #[test]
    fn test_unregistered_capability_is_not_implemented() {
        let registry = HandlerRegistry::new().with(Capability::Init, Fixed(ExitStatus::Ok));
        assert!(!registry.is_registered(Capability::Wait));
        assert_eq!(registry.handler_name(Capability::Init), "fixed");
        assert_eq!(registry.handler_name(Capability::Wait), "wait");

        let th = home();
        let ctx = HandlerContext {
            trust_home: &th,
            args: &[],
            testing: false,
        };
        let mut out: Vec<u8> = Vec::new();
        let err = registry
            .dispatch(&route(Capability::Wait), &ctx, &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "wait not implemented yet");
        assert_eq!(err.exit_status(), ExitStatus::Usage);
        assert!(out.is_empty());
    }

    #[test]
    fn test_handler_status_is_returned_unchanged() {
        let registry =
            HandlerRegistry::new().with(Capability::Wait, Fixed(ExitStatus::Interrupted));
        let th = home();
        let ctx = HandlerContext {
            trust_home: &th,
            args: &[],
            testing: false,
        };
        let status = registry
            .dispatch(&route(Capability::Wait), &ctx, &mut std::io::sink())
            .unwrap();
        assert_eq!(status.code(), 130);
    }
}
