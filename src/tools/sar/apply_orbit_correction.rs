use crate::tools::*;

/// Updates the orbital state vectors of radar data from a downloaded orbit
/// file.
pub struct ApplyOrbitCorrection {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ApplyOrbitCorrection {
    pub fn new() -> ApplyOrbitCorrection {
        // public constructor
        let name = "ApplyOrbitCorrection".to_string();
        let display_name = "Apply Orbit Correction".to_string();
        let toolbox = "Synthetic Aperture Radar".to_string();
        let alias = "ia".to_string();
        let description =
            "Updates the orbital state vectors of radar data from an orbit file.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Radar Data".to_owned(),
            flags: vec!["-i".to_owned(), "--in_radar_data".to_owned()],
            description: "The radar data whose orbit information is updated.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Orbit File".to_owned(),
            flags: vec!["--in_orbit_file".to_owned()],
            description:
                "The orbit state vector file. When unset the most accurate file already associated with the data is used."
                    .to_owned(),
            parameter_type: ParameterType::File,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Updated Radar Data".to_owned(),
            flags: vec![],
            description: "The radar dataset updated by the engine.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
        ];

        let usage = example_usage(
            &name,
            "-i=s1_grd.crf --in_orbit_file=orbits/S1A_OPER_AUX_POEORB.EOF",
        );

        ApplyOrbitCorrection {
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

impl GeoprocessingTool for ApplyOrbitCorrection {
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
