use crate::tools::*;

/// Makes an in-memory table view from netCDF variables.
pub struct MakeNetCDFTableView {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl MakeNetCDFTableView {
    pub fn new() -> MakeNetCDFTableView {
        // public constructor
        let name = "MakeNetCDFTableView".to_string();
        let display_name = "Make NetCDF Table View".to_string();
        let toolbox = "Multidimension".to_string();
        let alias = "md".to_string();
        let description = "Makes a table view from a netCDF file.".to_string();

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
            description: "The netCDF variables that become fields in the view.".to_owned(),
            parameter_type: ParameterType::StringList,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Table View".to_owned(),
            flags: vec!["-o".to_owned(), "--out_table_view".to_owned()],
            description: "The name of the table view to make.".to_owned(),
            parameter_type: ParameterType::Table,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Row Dimension".to_owned(),
            flags: vec!["--row_dimension".to_owned()],
            description: "Dimensions whose index combinations each become a row in the view."
                .to_owned(),
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
        ];

        let usage = example_usage(
            &name,
            "-i=rainfall.nc --variable='rainfall;elevation' -o=rainfall_view --row_dimension=station",
        );

        MakeNetCDFTableView {
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

impl GeoprocessingTool for MakeNetCDFTableView {
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
