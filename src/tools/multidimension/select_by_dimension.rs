use crate::tools::*;

/// Updates the dimension slice displayed by an existing netCDF layer or
/// table view.
pub struct SelectByDimension {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SelectByDimension {
    pub fn new() -> SelectByDimension {
        // public constructor
        let name = "SelectByDimension".to_string();
        let display_name = "Select By Dimension".to_string();
        let toolbox = "Multidimension".to_string();
        let alias = "md".to_string();
        let description =
            "Updates the dimension slice displayed by a netCDF layer or table view.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Layer or Table".to_owned(),
            flags: vec!["-i".to_owned(), "--in_layer_or_table".to_owned()],
            description: "The netCDF raster layer, feature layer, or table view to update."
                .to_owned(),
            parameter_type: ParameterType::Composite(vec![
                ParameterType::RasterLayer,
                ParameterType::FeatureLayer(GeometryType::Any),
                ParameterType::Table,
            ]),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Dimension Values".to_owned(),
            flags: vec!["--dimension_values".to_owned()],
            description:
                "Dimension-value pairs selecting the new slice, e.g. 'time 2;pressure 500'."
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

        parameters.push(ToolParameter {
            name: "Updated Layer or Table".to_owned(),
            flags: vec![],
            description: "The layer or view updated by the engine.".to_owned(),
            parameter_type: ParameterType::Composite(vec![
                ParameterType::RasterLayer,
                ParameterType::FeatureLayer(GeometryType::Any),
                ParameterType::Table,
            ]),
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
        ];

        let usage = example_usage(
            &name,
            "-i=tmin_layer --dimension_values='time 2' --value_selection_method=BY_INDEX",
        );

        SelectByDimension {
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

impl GeoprocessingTool for SelectByDimension {
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
