// crates/termfolio-cli/src/commands/mod.rs - Command Handler Modules
//
// MODULE ORGANIZATION:
// - init: config and starter content (special case, no context needed)
// - run: execute one terminal line
// - shell: interactive prompt over a session
// - list: describe the registered terminal commands
// - completions: shell completion scripts (feature-gated)

#[cfg(feature = "completions")]
pub mod completions;
pub mod init;
pub mod list;
pub mod run;
pub mod shell;
