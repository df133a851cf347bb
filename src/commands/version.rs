//! Version command implementation

use crate::config::DEFAULT_OUTPUT;
use crate::dataset::InputKind;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", banner());
    Ok(())
}

fn banner() -> String {
    let mut text = format!("evalmerge {}\n\n", env!("CARGO_PKG_VERSION"));

    text.push_str("Export files:\n");
    for kind in [
        InputKind::Pairs,
        InputKind::Evaluations,
        InputKind::Clusters,
        InputKind::Criteria,
    ] {
        let label = kind.to_string();
        text.push_str(&format!("  {:<12} {}\n", label, kind.file_name("<tag>")));
    }
    text.push_str(&format!("\nDefault output: {}\n", DEFAULT_OUTPUT));
    text.push_str(&format!(
        "Built with Rust {}+ ({})\n",
        env!("CARGO_PKG_RUST_VERSION"),
        build_profile()
    ));
    text
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_names_exports_and_default_output() {
        let banner = banner();
        assert!(banner.starts_with(&format!("evalmerge {}", env!("CARGO_PKG_VERSION"))));
        assert!(banner.contains("pairData (<tag>).json"));
        assert!(banner.contains("evaluation (<tag>).json"));
        assert!(banner.contains("cluster (<tag>).json"));
        assert!(banner.contains("Default output: dest.json"));
    }
}
