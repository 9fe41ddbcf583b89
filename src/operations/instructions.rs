//! Onboarding instructions printed after a password workflow
//!
//! The steps always put MFA setup before anything privileged: the account
//! grants nothing until the user signs in with MFA and assumes a role.

use console::Style;
use std::fmt::Write;

use super::{ProvisionedIdentity, RegionEndpoint, RotationKind};

const PASSWORD_RULES: &str =
    "min 20 chars, requires upper and lowercase, numbers and symbols";

const MFA_NOTE: &str = "NOTE: You will not be able to do anything in the account unless you log in \
                        with MFA and assume the AWS IAM role for your project.";

/// Render the credentials and the step-by-step script for the operator
pub fn render(
    identity: &ProvisionedIdentity,
    endpoint: &RegionEndpoint,
    kind: RotationKind,
) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        bold.apply_to("Login URL:"),
        endpoint.console_login_url
    );
    let _ = writeln!(out, "{} {}", bold.apply_to("Username:"), identity.user_name);
    let _ = writeln!(
        out,
        "{} {}",
        bold.apply_to("Password:"),
        identity.temporary_password
    );
    let _ = writeln!(out, "Please follow these steps:");

    match kind {
        RotationKind::Provision => {
            let _ = writeln!(
                out,
                "1. Log in to the console with your temporary password."
            );
            let _ = writeln!(
                out,
                "2. Create an MFA. Save MFA to 1Password as One Time Password (OTP)"
            );
            if let Some(url) = &endpoint.security_credentials_url {
                let _ = writeln!(out, "\tURL: {url}");
            }
            let _ = writeln!(out, "3. Log out of the AWS Console");
            let _ = writeln!(out, "4. Log in to the console with your new MFA");
            let _ = writeln!(out, "5. Reset your password ({PASSWORD_RULES})");
            let _ = writeln!(out, "6. Assume the IAM Role you wish to use.");
        }
        RotationKind::Reset => {
            let _ = writeln!(out, "1. Log in to the console with your new password");
            let _ = writeln!(out, "2. Reset your password ({PASSWORD_RULES})");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{MFA_NOTE}");
    out
}
