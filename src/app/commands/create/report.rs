use std::path::Path;

use crate::domain::RegistrationResult;
use crate::domain::peoplesoft::DOCS_URL;
use crate::domain::project::PACKAGE_MANAGER;
use crate::ports::BrowserLauncher;

/// Print the summary and, when asked, open the app. Never fails.
pub(super) fn report<B: BrowserLauncher>(
    browser: &B,
    project_root: &Path,
    registration: &RegistrationResult,
    deployed: bool,
    open_browser: bool,
) {
    println!();
    println!("✅ That's it!");
    println!();
    if deployed {
        println!("Your app is live at {}", registration.app_url);
    } else {
        println!("Your app is registered at {}", registration.app_url);
    }
    println!();
    println!("To deploy changes, run:");
    println!("  cd {}", project_root.display());
    println!("  {} deploy", PACKAGE_MANAGER);
    println!();
    println!(
        "For local development, send the {} header to point the server at your dev server.",
        registration.local_dev_header_name
    );
    println!("Learn more at {}", DOCS_URL);

    if open_browser {
        if let Err(err) = browser.open(&registration.app_url) {
            tracing::warn!("Could not open a browser: {}", err);
        }
    }
}
