use crate::tools::*;

/// Makes an in-memory raster layer from a netCDF variable.
pub struct MakeNetCDFRasterLayer {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl MakeNetCDFRasterLayer {
    pub fn new() -> MakeNetCDFRasterLayer {
        // public constructor
        let name = "MakeNetCDFRasterLayer".to_string();
        let display_name = "Make NetCDF Raster Layer".to_string();
        let toolbox = "Multidimension".to_string();
        let alias = "md".to_string();
        let description = "Makes a raster layer from a netCDF file.".to_string();

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
            name: "Variable".to_owned(),
            flags: vec!["--variable".to_owned()],
            description: "The netCDF variable rendered as cell values.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "X Dimension".to_owned(),
            flags: vec!["--x_dimension".to_owned()],
            description: "The dimension defining the x coordinates of the raster.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Y Dimension".to_owned(),
            flags: vec!["--y_dimension".to_owned()],
            description: "The dimension defining the y coordinates of the raster.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster Layer".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster_layer".to_owned()],
            description: "The name of the raster layer to make.".to_owned(),
            parameter_type: ParameterType::RasterLayer,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Band Dimension".to_owned(),
            flags: vec!["--band_dimension".to_owned()],
            description: "A dimension whose values become bands in a multiband raster."
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
            EnvironmentKey::Extent,
            EnvironmentKey::CellSize,
            EnvironmentKey::SnapRaster,
            EnvironmentKey::OutputCoordinateSystem,
        ];

        let usage = example_usage(
            &name,
            "-i=temperature.nc --variable=tmin --x_dimension=lon --y_dimension=lat -o=tmin_layer --dimension_values='time 1'",
        );

        MakeNetCDFRasterLayer {
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

impl GeoprocessingTool for MakeNetCDFRasterLayer {
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
