//! CLI argument parsing structures.

use clap::Parser;

/// Main CLI structure for gdsweep.
#[derive(Parser, Debug)]
#[command(name = "gdsweep")]
#[command(about = "Archive all GuardDuty findings across every AWS region", long_about = None)]
pub struct Cli {
    /// AWS profile name (falls back to $AWS_PROFILE, then "default")
    #[arg(short, long)]
    pub profile: Option<String>,
}

impl Cli {
    /// The profile to use, applying the environment fallback.
    pub fn profile(&self) -> String {
        resolve_profile(
            self.profile.as_deref(),
            std::env::var("AWS_PROFILE").ok().as_deref(),
        )
    }
}

/// Resolve the profile name: explicit flag, then environment, then "default".
pub fn resolve_profile(flag: Option<&str>, env: Option<&str>) -> String {
    flag.filter(|p| !p.is_empty())
        .or_else(|| env.filter(|p| !p.is_empty()))
        .unwrap_or("default")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(resolve_profile(Some("work"), Some("home")), "work");
    }

    #[test]
    fn environment_used_when_no_flag() {
        assert_eq!(resolve_profile(None, Some("home")), "home");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_profile(None, None), "default");
        assert_eq!(resolve_profile(Some(""), Some("")), "default");
    }
}
