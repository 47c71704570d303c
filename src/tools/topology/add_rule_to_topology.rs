use crate::tools::*;

/// Adds an integrity rule to a topology. Some rules relate one feature class
/// to itself, others relate two feature classes or subtypes.
pub struct AddRuleToTopology {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AddRuleToTopology {
    pub fn new() -> AddRuleToTopology {
        // public constructor
        let name = "AddRuleToTopology".to_string();
        let display_name = "Add Rule To Topology".to_string();
        let toolbox = "Topology".to_string();
        let alias = "management".to_string();
        let description = "Adds an integrity rule to a topology.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Topology".to_owned(),
            flags: vec!["-i".to_owned(), "--in_topology".to_owned()],
            description: "The topology the rule is added to.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Rule Type".to_owned(),
            flags: vec!["--rule_type".to_owned()],
            description: "The topology rule to add.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "rule_type",
                &[
                    ("Must Not Overlap (Area)", "Polygon interiors may not overlap"),
                    ("Must Not Have Gaps (Area)", "No voids within or between polygons"),
                    (
                        "Must Not Overlap With (Area-Area)",
                        "Polygons may not overlap polygons of another class",
                    ),
                    (
                        "Must Be Covered By Feature Class Of (Area-Area)",
                        "Polygons must be covered by polygons of another class",
                    ),
                    (
                        "Must Cover Each Other (Area-Area)",
                        "Two polygon classes must cover the same area",
                    ),
                    (
                        "Boundary Must Be Covered By (Area-Line)",
                        "Polygon boundaries must be covered by lines",
                    ),
                    ("Must Not Overlap (Line)", "Lines may not overlap lines of the same class"),
                    ("Must Not Intersect (Line)", "Lines may not cross or overlap"),
                    ("Must Not Have Dangles (Line)", "Line endpoints must touch other lines"),
                    (
                        "Must Not Have Pseudo-Nodes (Line)",
                        "Line endpoints must connect to more than one line",
                    ),
                    ("Must Not Self-Overlap (Line)", "A line may not overlap itself"),
                    ("Must Not Self-Intersect (Line)", "A line may not cross itself"),
                    (
                        "Must Be Covered By Boundary Of (Line-Area)",
                        "Lines must be covered by polygon boundaries",
                    ),
                    (
                        "Must Be Properly Inside (Point-Area)",
                        "Points must fall within polygons",
                    ),
                    (
                        "Must Be Covered By Endpoint Of (Point-Line)",
                        "Points must coincide with line endpoints",
                    ),
                ],
            )),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Feature Class".to_owned(),
            flags: vec!["--in_featureclass".to_owned()],
            description: "The feature class the rule applies to.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Any),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Subtype".to_owned(),
            flags: vec!["--subtype".to_owned()],
            description: "The subtype of the first feature class the rule applies to.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Feature Class 2".to_owned(),
            flags: vec!["--in_featureclass2".to_owned()],
            description: "The second feature class for rules relating two classes.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Any),
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Subtype 2".to_owned(),
            flags: vec!["--subtype2".to_owned()],
            description: "The subtype of the second feature class the rule applies to.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Updated Topology".to_owned(),
            flags: vec![],
            description: "The topology updated by the engine.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::AutoCommit,
        ];

        let usage = example_usage(
            &name,
            "-i=gis.gdb/landbase/landbase_topology --rule_type='Must Not Overlap (Area)' --in_featureclass=parcels",
        );

        AddRuleToTopology {
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

impl GeoprocessingTool for AddRuleToTopology {
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
