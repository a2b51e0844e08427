use serde::Deserialize;

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Run settings. The defaults carry the production column contract
/// (Matrixify export vs CEDI stock list), so a run needs no config file at
/// all; a TOML file overrides whole sections.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    #[serde(default = "SideConfig::ecommerce_defaults")]
    pub ecommerce: SideConfig,
    #[serde(default = "SideConfig::warehouse_defaults")]
    pub warehouse: SideConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ecommerce: SideConfig::ecommerce_defaults(),
            warehouse: SideConfig::warehouse_defaults(),
            output: OutputConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sides
// ---------------------------------------------------------------------------

/// Column contract for one input. Each role lists accepted header names in
/// priority order; the resolver takes the first that matches, so accepting a
/// new export layout is one more entry in the right list.
#[derive(Debug, Clone, Deserialize)]
pub struct SideConfig {
    pub key: Vec<String>,
    #[serde(default)]
    pub quantity: Vec<String>,
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(default)]
    pub header_scan: Option<HeaderScan>,
}

impl SideConfig {
    pub fn ecommerce_defaults() -> Self {
        Self {
            key: vec!["Variant SKU".into()],
            quantity: vec!["Inventory Available: Ecommerce".into()],
            title: vec!["Title".into()],
            header_scan: None,
        }
    }

    pub fn warehouse_defaults() -> Self {
        Self {
            key: vec![
                "Código Producto".into(),
                "Variant SKU".into(),
                "SKU".into(),
            ],
            quantity: vec![
                "Cant. Disponible".into(),
                "Suma de Cant. Disponible".into(),
                "Disponible".into(),
                "Saldo".into(),
                "Total".into(),
            ],
            title: vec![
                "Descripción".into(),
                "Nombre Producto".into(),
                "Producto".into(),
            ],
            header_scan: Some(HeaderScan {
                marker: "Código Producto".into(),
                window: default_scan_window(),
                require_marker: false,
            }),
        }
    }
}

/// Where to look for the header row. Warehouse exports stack banner and
/// filter rows above the real header.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderScan {
    pub marker: String,
    #[serde(default = "default_scan_window")]
    pub window: usize,
    #[serde(default)]
    pub require_marker: bool,
}

fn default_scan_window() -> usize {
    20
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Header names for the apply file. Defaults match the Matrixify import
/// schema so the artifact re-imports without edits.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_key_header")]
    pub key_header: String,
    #[serde(default = "default_quantity_header")]
    pub quantity_header: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            key_header: default_key_header(),
            quantity_header: default_quantity_header(),
        }
    }
}

fn default_key_header() -> String {
    "Variant SKU".into()
}

fn default_quantity_header() -> String {
    "Inventory Available: Ecommerce".into()
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl RunConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: RunConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        validate_side("ecommerce", &self.ecommerce)?;
        validate_side("warehouse", &self.warehouse)?;

        if self.output.key_header.trim().is_empty() {
            return Err(ReconError::ConfigValidation(
                "output.key_header must not be empty".into(),
            ));
        }
        if self.output.quantity_header.trim().is_empty() {
            return Err(ReconError::ConfigValidation(
                "output.quantity_header must not be empty".into(),
            ));
        }

        Ok(())
    }
}

fn validate_side(name: &str, side: &SideConfig) -> Result<(), ReconError> {
    if side.key.is_empty() {
        return Err(ReconError::ConfigValidation(format!(
            "{name}.key needs at least one column alias"
        )));
    }
    if side.quantity.is_empty() {
        return Err(ReconError::ConfigValidation(format!(
            "{name}.quantity needs at least one column alias"
        )));
    }
    if let Some(ref scan) = side.header_scan {
        if scan.marker.trim().is_empty() {
            return Err(ReconError::ConfigValidation(format!(
                "{name}.header_scan.marker must not be empty"
            )));
        }
        if scan.window == 0 {
            return Err(ReconError::ConfigValidation(format!(
                "{name}.header_scan.window must be at least 1"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
