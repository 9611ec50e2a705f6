use crate::ports::{AppRegistrar, BrowserLauncher, CommandRunner, DefaultsStore, Prompter};

/// Application context holding the collaborators one run talks to.
pub struct AppContext<P, D, R, C, B>
where
    P: Prompter,
    D: DefaultsStore,
    R: AppRegistrar,
    C: CommandRunner,
    B: BrowserLauncher,
{
    prompter: P,
    defaults: D,
    registrar: R,
    runner: C,
    browser: B,
}

impl<P, D, R, C, B> AppContext<P, D, R, C, B>
where
    P: Prompter,
    D: DefaultsStore,
    R: AppRegistrar,
    C: CommandRunner,
    B: BrowserLauncher,
{
    /// Create a new application context.
    pub fn new(prompter: P, defaults: D, registrar: R, runner: C, browser: B) -> Self {
        Self { prompter, defaults, registrar, runner, browser }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Saved per-user defaults.
    pub fn defaults(&self) -> &D {
        &self.defaults
    }

    pub fn registrar(&self) -> &R {
        &self.registrar
    }

    /// Runner for package-manager and runtime subprocesses.
    pub fn runner(&self) -> &C {
        &self.runner
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }
}
