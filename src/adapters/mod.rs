pub mod assets;
pub mod browser_webbrowser;
pub mod command_process;
pub mod defaults_file;
pub mod project_filesystem;
pub mod prompter_dialoguer;
pub mod registrar_http;
