// Synthetic Aperture Radar toolbox (engine alias `ia`): the standard
// Sentinel-1 preprocessing chain, from orbit correction through terrain
// correction.
mod apply_geometric_terrain_correction;
mod apply_orbit_correction;
mod apply_radiometric_calibration;
mod apply_radiometric_terrain_flattening;
mod convert_sar_units;
mod despeckle;
mod download_orbit_file;
mod multilook;
mod remove_thermal_noise;

pub use self::apply_geometric_terrain_correction::ApplyGeometricTerrainCorrection;
pub use self::apply_orbit_correction::ApplyOrbitCorrection;
pub use self::apply_radiometric_calibration::ApplyRadiometricCalibration;
pub use self::apply_radiometric_terrain_flattening::ApplyRadiometricTerrainFlattening;
pub use self::convert_sar_units::ConvertSARUnits;
pub use self::despeckle::Despeckle;
pub use self::download_orbit_file::DownloadOrbitFile;
pub use self::multilook::Multilook;
pub use self::remove_thermal_noise::RemoveThermalNoise;

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn sar_tools_use_the_ia_alias() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in [
            "ApplyGeometricTerrainCorrection",
            "ApplyOrbitCorrection",
            "ApplyRadiometricCalibration",
            "ApplyRadiometricTerrainFlattening",
            "ConvertSARUnits",
            "Despeckle",
            "DownloadOrbitFile",
            "Multilook",
            "RemoveThermalNoise",
        ] {
            let tool = tm.get_tool(name).unwrap();
            assert_eq!(tool.get_alias(), "ia", "{}", name);
            assert_eq!(tool.get_toolbox(), "Synthetic Aperture Radar", "{}", name);
            assert_eq!(tool.parameters()[0].name, "Input Radar Data", "{}", name);
        }
    }

    #[test]
    fn calibration_types_include_none() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("ApplyRadiometricCalibration")
            .unwrap();
        let cal = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Calibration Type")
            .unwrap();
        match &cal.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert_eq!(
                    domain.codes(),
                    vec!["BETA_NOUGHT", "SIGMA_NOUGHT", "GAMMA_NOUGHT", "NONE"]
                );
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
        assert_eq!(cal.default_value.as_deref(), Some("BETA_NOUGHT"));
    }

    #[test]
    fn despeckle_filter_sizes_are_odd_kernels() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("Despeckle")
            .unwrap();
        let size = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Filter Size")
            .unwrap();
        match &size.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert_eq!(domain.codes(), vec!["3x3", "5x5", "7x7", "9x9", "11x11"]);
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
        assert_eq!(size.default_value.as_deref(), Some("3x3"));
    }

    #[test]
    fn download_orbit_file_derives_the_downloaded_file() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("DownloadOrbitFile")
            .unwrap();
        let last = tool.parameters().last().unwrap();
        assert_eq!(last.direction, ParameterDirection::Derived);
        assert_eq!(last.parameter_type, ParameterType::File);
        let orbit_type = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Orbit Type")
            .unwrap();
        assert_eq!(
            orbit_type.default_value.as_deref(),
            Some("SENTINEL_PRECISE")
        );
    }
}
