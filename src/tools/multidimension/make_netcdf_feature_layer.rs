use crate::tools::*;

/// Makes an in-memory point feature layer from a netCDF file. Coordinate
/// variables supply the geometry; remaining variables become attributes.
pub struct MakeNetCDFFeatureLayer {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl MakeNetCDFFeatureLayer {
    pub fn new() -> MakeNetCDFFeatureLayer {
        // public constructor
        let name = "MakeNetCDFFeatureLayer".to_string();
        let display_name = "Make NetCDF Feature Layer".to_string();
        let toolbox = "Multidimension".to_string();
        let alias = "md".to_string();
        let description = "Makes a point feature layer from a netCDF file.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input netCDF File".to_owned(),
            flags: vec!["-i".to_owned(), "--in_netcdf_file".to_owned()],
            description: "The netCDF file to read.".to_owned(),
            parameter_type: ParameterType::NetCdfFile,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Variables".to_owned(),
            flags: vec!["--variable".to_owned()],
            description: "The netCDF variables carried as attributes on the layer.".to_owned(),
            parameter_type: ParameterType::StringList,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "X Variable".to_owned(),
            flags: vec!["--x_variable".to_owned()],
            description: "The coordinate variable used for x, typically lon.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Y Variable".to_owned(),
            flags: vec!["--y_variable".to_owned()],
            description: "The coordinate variable used for y, typically lat.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Layer".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_layer".to_owned()],
            description: "The name of the feature layer to make.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Point),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Row Dimension".to_owned(),
            flags: vec!["--row_dimension".to_owned()],
            description:
                "Dimensions whose index combinations each become a feature in the layer."
                    .to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Z Variable".to_owned(),
            flags: vec!["--z_variable".to_owned()],
            description: "A variable supplying elevation values for the features.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "M Variable".to_owned(),
            flags: vec!["--m_variable".to_owned()],
            description: "A variable supplying measure values for the features.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Dimension Values".to_owned(),
            flags: vec!["--dimension_values".to_owned()],
            description:
                "Dimension-value pairs fixing a slice of the file, e.g. 'time 1;pressure 500'."
                    .to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Value Selection Method".to_owned(),
            flags: vec!["--value_selection_method".to_owned()],
            description: "Whether dimension values are matched by value or by index.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "value_selection_method",
                &[
                    ("BY_VALUE", "Match dimension values literally"),
                    ("BY_INDEX", "Match dimension values by position"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("BY_VALUE".to_owned()),
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::OutputZFlag,
            EnvironmentKey::OutputMFlag,
        ];

        let usage = example_usage(
            &name,
            "-i=rainfall.nc --variable=rainfall --x_variable=lon --y_variable=lat -o=rainfall_points --row_dimension='station'",
        );

        MakeNetCDFFeatureLayer {
            name: name,
            display_name: display_name,
            description: description,
            toolbox: toolbox,
            alias: alias,
            parameters: parameters,
            valid_environments: valid_environments,
            example_usage: usage,
        }
    }
}

impl GeoprocessingTool for MakeNetCDFFeatureLayer {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        self.name.clone()
    }

    fn get_display_name(&self) -> String {
        self.display_name.clone()
    }

    fn get_tool_description(&self) -> String {
        self.description.clone()
    }

    fn get_toolbox(&self) -> String {
        self.toolbox.clone()
    }

    fn get_alias(&self) -> String {
        self.alias.clone()
    }

    fn parameters(&self) -> &[ToolParameter] {
        &self.parameters
    }

    fn valid_environments(&self) -> &[EnvironmentKey] {
        &self.valid_environments
    }

    fn get_example_usage(&self) -> String {
        self.example_usage.clone()
    }
}
