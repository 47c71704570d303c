// Multidimension toolbox (engine alias `md`): layers and views over netCDF
// and OPeNDAP scientific data.
mod make_netcdf_feature_layer;
mod make_netcdf_raster_layer;
mod make_netcdf_table_view;
mod make_opendap_raster_layer;
mod select_by_dimension;

pub use self::make_netcdf_feature_layer::MakeNetCDFFeatureLayer;
pub use self::make_netcdf_raster_layer::MakeNetCDFRasterLayer;
pub use self::make_netcdf_table_view::MakeNetCDFTableView;
pub use self::make_opendap_raster_layer::MakeOPeNDAPRasterLayer;
pub use self::select_by_dimension::SelectByDimension;

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn netcdf_tools_share_the_value_selection_domain() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in [
            "MakeNetCDFFeatureLayer",
            "MakeNetCDFRasterLayer",
            "MakeNetCDFTableView",
            "MakeOPeNDAPRasterLayer",
            "SelectByDimension",
        ] {
            let tool = tm.get_tool(name).unwrap();
            assert_eq!(tool.get_alias(), "md", "{}", name);
            let method = tool
                .parameters()
                .iter()
                .find(|p| p.name == "Value Selection Method")
                .unwrap();
            assert_eq!(method.default_value.as_deref(), Some("BY_VALUE"), "{}", name);
            match &method.parameter_type {
                ParameterType::CodedValue(domain) => {
                    assert_eq!(domain.codes(), vec!["BY_VALUE", "BY_INDEX"], "{}", name);
                }
                other => panic!("unexpected parameter type {:?}", other),
            }
        }
    }

    #[test]
    fn netcdf_file_inputs_are_path_like() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("MakeNetCDFRasterLayer")
            .unwrap();
        let file = &tool.parameters()[0];
        assert_eq!(file.parameter_type, ParameterType::NetCdfFile);
        assert!(file.parameter_type.is_path_like());
    }

    #[test]
    fn opendap_url_is_not_path_like() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("MakeOPeNDAPRasterLayer")
            .unwrap();
        let url = &tool.parameters()[0];
        assert_eq!(url.parameter_type, ParameterType::String);
        assert!(!url.parameter_type.is_path_like());
    }

    #[test]
    fn select_by_dimension_updates_its_input_in_place() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("SelectByDimension")
            .unwrap();
        let last = tool.parameters().last().unwrap();
        assert_eq!(last.direction, ParameterDirection::Derived);
        assert!(last.flags.is_empty());
    }
}
