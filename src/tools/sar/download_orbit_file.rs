use crate::tools::*;

/// Downloads the orbit state vector file matching a radar acquisition.
pub struct DownloadOrbitFile {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl DownloadOrbitFile {
    pub fn new() -> DownloadOrbitFile {
        // public constructor
        let name = "DownloadOrbitFile".to_string();
        let display_name = "Download Orbit File".to_string();
        let toolbox = "Synthetic Aperture Radar".to_string();
        let alias = "ia".to_string();
        let description =
            "Downloads the orbit state vector file matching a radar acquisition.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Radar Data".to_owned(),
            flags: vec!["-i".to_owned(), "--in_radar_data".to_owned()],
            description: "The radar data the orbit file is fetched for.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Orbit Type".to_owned(),
            flags: vec!["--orbit_type".to_owned()],
            description: "The class of orbit file to download.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "orbit_type",
                &[
                    (
                        "SENTINEL_PRECISE",
                        "Precise orbit ephemerides, available about 20 days after acquisition",
                    ),
                    (
                        "SENTINEL_RESTITUTED",
                        "Restituted orbits, available within hours of acquisition",
                    ),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("SENTINEL_PRECISE".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Output Folder".to_owned(),
            flags: vec!["--folder".to_owned()],
            description:
                "Where the file is stored. When unset it is placed beside the radar data."
                    .to_owned(),
            parameter_type: ParameterType::Folder,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Orbit File".to_owned(),
            flags: vec![],
            description: "The downloaded orbit state vector file.".to_owned(),
            parameter_type: ParameterType::File,
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
        ];

        let usage = example_usage(
            &name,
            "-i=s1_grd.crf --orbit_type=SENTINEL_PRECISE --folder=orbits",
        );

        DownloadOrbitFile {
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

impl GeoprocessingTool for DownloadOrbitFile {
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
