use plx_manifest::PluginManifest;
use plx_receipt::load_installed;

use super::check_plugin_name;
use crate::context::PlxContext;
use crate::errors::CommandError;

/// Render a receipt as YAML (the stored form) or pretty JSON
pub fn render_receipt(receipt: &PluginManifest, json: bool) -> Result<String, CommandError> {
    if json {
        serde_json::to_string_pretty(receipt).map_err(|e| CommandError::Output(e.to_string()))
    } else {
        serde_yaml::to_string(receipt).map_err(|e| CommandError::Output(e.to_string()))
    }
}

pub fn show_receipt(ctx: &PlxContext, name: &str, json: bool) -> Result<(), CommandError> {
    check_plugin_name(name)?;

    let receipt = load_installed(&ctx.paths.receipts, name)?
        .ok_or_else(|| CommandError::NotInstalled(name.to_string()))?;
    let rendered = render_receipt(&receipt, json)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::index_plugin;

    #[test]
    fn test_render_yaml_matches_receipt_schema() {
        let receipt = index_plugin("foo", "linux", "amd64");
        let rendered = render_receipt(&receipt, false).unwrap_or_default();
        assert!(rendered.contains("apiVersion: plx.dev/v1alpha1"));
        assert!(rendered.contains("name: foo"));
        assert!(rendered.contains("bin: foo"));
    }

    #[test]
    fn test_render_json() {
        let receipt = index_plugin("foo", "linux", "amd64");
        let rendered = render_receipt(&receipt, true).unwrap_or_default();
        let value: serde_json::Value =
            serde_json::from_str(&rendered).unwrap_or(serde_json::Value::Null);
        assert_eq!(value["metadata"]["name"], "foo");
        assert_eq!(value["spec"]["platforms"][0]["selector"]["matchLabels"]["os"], "linux");
        assert_eq!(value["spec"]["shortDescription"], "The foo plugin");
    }
}
