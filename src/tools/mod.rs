pub mod cartography;
pub mod multidimension;
pub mod raster_generalization;
pub mod sar;
pub mod terrain;
pub mod territory_design;
pub mod topology;

use crate::engine::{EngineClient, EngineRequest};
use crate::utils::get_formatted_elapsed_time;
use serde_json;
use std::collections::BTreeMap;
use std::env;
use std::io::{Error, ErrorKind};
use std::path;
use std::time::Instant;

/// Placeholder forwarded in the ordered parameter array for optional and
/// derived slots with no value, so parameter positions stay stable.
pub const UNSET: &str = "#";

#[derive(Default)]
pub struct ToolManager {
    pub working_dir: String,
    pub verbose: bool,
    tool_names: Vec<String>,
}

impl ToolManager {
    pub fn new<'a>(
        working_directory: &'a str,
        verbose_mode: &'a bool,
    ) -> Result<ToolManager, Error> {
        let mut tool_names = vec![];
        // terrain
        tool_names.push("AddFeatureClassToTerrain".to_string());
        tool_names.push("AddTerrainPyramidLevel".to_string());
        tool_names.push("AppendTerrainPoints".to_string());
        tool_names.push("BuildTerrain".to_string());
        tool_names.push("ChangeTerrainReferenceScale".to_string());
        tool_names.push("ChangeTerrainResolutionBounds".to_string());
        tool_names.push("CreateTerrain".to_string());
        tool_names.push("DeleteTerrainPoints".to_string());
        tool_names.push("RemoveFeatureClassFromTerrain".to_string());
        tool_names.push("RemoveTerrainPyramidLevel".to_string());
        tool_names.push("ReplaceTerrainPoints".to_string());
        tool_names.push("TerrainToPoints".to_string());
        tool_names.push("TerrainToRaster".to_string());
        tool_names.push("TerrainToTin".to_string());

        // cartography
        tool_names.push("AggregatePoints".to_string());
        tool_names.push("AggregatePolygons".to_string());
        tool_names.push("CollapseDualLinesToCenterline".to_string());
        tool_names.push("CreateCartographicPartitions".to_string());
        tool_names.push("DelineateBuiltUpAreas".to_string());
        tool_names.push("MergeDividedRoads".to_string());
        tool_names.push("SimplifyBuilding".to_string());
        tool_names.push("SimplifyLine".to_string());
        tool_names.push("SimplifyPolygon".to_string());
        tool_names.push("SmoothLine".to_string());
        tool_names.push("SmoothPolygon".to_string());
        tool_names.push("ThinRoadNetwork".to_string());

        // topology
        tool_names.push("AddFeatureClassToTopology".to_string());
        tool_names.push("AddRuleToTopology".to_string());
        tool_names.push("CreateTopology".to_string());
        tool_names.push("ExportTopologyErrors".to_string());
        tool_names.push("RemoveFeatureClassFromTopology".to_string());
        tool_names.push("RemoveRuleFromTopology".to_string());
        tool_names.push("SetClusterTolerance".to_string());
        tool_names.push("ValidateTopology".to_string());

        // multidimension
        tool_names.push("MakeNetCDFFeatureLayer".to_string());
        tool_names.push("MakeNetCDFRasterLayer".to_string());
        tool_names.push("MakeNetCDFTableView".to_string());
        tool_names.push("MakeOPeNDAPRasterLayer".to_string());
        tool_names.push("SelectByDimension".to_string());

        // territory_design
        tool_names.push("AddBalanceVariables".to_string());
        tool_names.push("AddTerritoryLevel".to_string());
        tool_names.push("CreateTerritorySolution".to_string());
        tool_names.push("RebalanceTerritories".to_string());
        tool_names.push("SetTerritoryDistanceParameters".to_string());
        tool_names.push("SolveTerritories".to_string());

        // sar
        tool_names.push("ApplyGeometricTerrainCorrection".to_string());
        tool_names.push("ApplyOrbitCorrection".to_string());
        tool_names.push("ApplyRadiometricCalibration".to_string());
        tool_names.push("ApplyRadiometricTerrainFlattening".to_string());
        tool_names.push("ConvertSARUnits".to_string());
        tool_names.push("Despeckle".to_string());
        tool_names.push("DownloadOrbitFile".to_string());
        tool_names.push("Multilook".to_string());
        tool_names.push("RemoveThermalNoise".to_string());

        // raster_generalization
        tool_names.push("Aggregate".to_string());
        tool_names.push("BoundaryClean".to_string());
        tool_names.push("Expand".to_string());
        tool_names.push("MajorityFilter".to_string());
        tool_names.push("Nibble".to_string());
        tool_names.push("RegionGroup".to_string());
        tool_names.push("Shrink".to_string());
        tool_names.push("Thin".to_string());

        tool_names.sort();

        let tm = ToolManager {
            working_dir: working_directory.to_string(),
            verbose: *verbose_mode,
            tool_names: tool_names,
        };
        Ok(tm)
    }

    pub fn tool_names(&self) -> &[String] {
        &self.tool_names
    }

    pub fn get_tool(&self, tool_name: &str) -> Option<Box<dyn GeoprocessingTool + 'static>> {
        match tool_name.to_lowercase().replace("_", "").as_ref() {
            // terrain
            "addfeatureclasstoterrain" => Some(Box::new(terrain::AddFeatureClassToTerrain::new())),
            "addterrainpyramidlevel" => Some(Box::new(terrain::AddTerrainPyramidLevel::new())),
            "appendterrainpoints" => Some(Box::new(terrain::AppendTerrainPoints::new())),
            "buildterrain" => Some(Box::new(terrain::BuildTerrain::new())),
            "changeterrainreferencescale" => {
                Some(Box::new(terrain::ChangeTerrainReferenceScale::new()))
            }
            "changeterrainresolutionbounds" => {
                Some(Box::new(terrain::ChangeTerrainResolutionBounds::new()))
            }
            "createterrain" => Some(Box::new(terrain::CreateTerrain::new())),
            "deleteterrainpoints" => Some(Box::new(terrain::DeleteTerrainPoints::new())),
            "removefeatureclassfromterrain" => {
                Some(Box::new(terrain::RemoveFeatureClassFromTerrain::new()))
            }
            "removeterrainpyramidlevel" => {
                Some(Box::new(terrain::RemoveTerrainPyramidLevel::new()))
            }
            "replaceterrainpoints" => Some(Box::new(terrain::ReplaceTerrainPoints::new())),
            "terraintopoints" => Some(Box::new(terrain::TerrainToPoints::new())),
            "terraintoraster" => Some(Box::new(terrain::TerrainToRaster::new())),
            "terraintotin" => Some(Box::new(terrain::TerrainToTin::new())),

            // cartography
            "aggregatepoints" => Some(Box::new(cartography::AggregatePoints::new())),
            "aggregatepolygons" => Some(Box::new(cartography::AggregatePolygons::new())),
            "collapseduallinestocenterline" => {
                Some(Box::new(cartography::CollapseDualLinesToCenterline::new()))
            }
            "createcartographicpartitions" => {
                Some(Box::new(cartography::CreateCartographicPartitions::new()))
            }
            "delineatebuiltupareas" => Some(Box::new(cartography::DelineateBuiltUpAreas::new())),
            "mergedividedroads" => Some(Box::new(cartography::MergeDividedRoads::new())),
            "simplifybuilding" => Some(Box::new(cartography::SimplifyBuilding::new())),
            "simplifyline" => Some(Box::new(cartography::SimplifyLine::new())),
            "simplifypolygon" => Some(Box::new(cartography::SimplifyPolygon::new())),
            "smoothline" => Some(Box::new(cartography::SmoothLine::new())),
            "smoothpolygon" => Some(Box::new(cartography::SmoothPolygon::new())),
            "thinroadnetwork" => Some(Box::new(cartography::ThinRoadNetwork::new())),

            // topology
            "addfeatureclasstotopology" => {
                Some(Box::new(topology::AddFeatureClassToTopology::new()))
            }
            "addruletotopology" => Some(Box::new(topology::AddRuleToTopology::new())),
            "createtopology" => Some(Box::new(topology::CreateTopology::new())),
            "exporttopologyerrors" => Some(Box::new(topology::ExportTopologyErrors::new())),
            "removefeatureclassfromtopology" => {
                Some(Box::new(topology::RemoveFeatureClassFromTopology::new()))
            }
            "removerulefromtopology" => Some(Box::new(topology::RemoveRuleFromTopology::new())),
            "setclustertolerance" => Some(Box::new(topology::SetClusterTolerance::new())),
            "validatetopology" => Some(Box::new(topology::ValidateTopology::new())),

            // multidimension
            "makenetcdffeaturelayer" => {
                Some(Box::new(multidimension::MakeNetCDFFeatureLayer::new()))
            }
            "makenetcdfrasterlayer" => Some(Box::new(multidimension::MakeNetCDFRasterLayer::new())),
            "makenetcdftableview" => Some(Box::new(multidimension::MakeNetCDFTableView::new())),
            "makeopendaprasterlayer" => {
                Some(Box::new(multidimension::MakeOPeNDAPRasterLayer::new()))
            }
            "selectbydimension" => Some(Box::new(multidimension::SelectByDimension::new())),

            // territory_design
            "addbalancevariables" => Some(Box::new(territory_design::AddBalanceVariables::new())),
            "addterritorylevel" => Some(Box::new(territory_design::AddTerritoryLevel::new())),
            "createterritorysolution" => {
                Some(Box::new(territory_design::CreateTerritorySolution::new()))
            }
            "rebalanceterritories" => Some(Box::new(territory_design::RebalanceTerritories::new())),
            "setterritorydistanceparameters" => {
                Some(Box::new(territory_design::SetTerritoryDistanceParameters::new()))
            }
            "solveterritories" => Some(Box::new(territory_design::SolveTerritories::new())),

            // sar
            "applygeometricterraincorrection" => {
                Some(Box::new(sar::ApplyGeometricTerrainCorrection::new()))
            }
            "applyorbitcorrection" => Some(Box::new(sar::ApplyOrbitCorrection::new())),
            "applyradiometriccalibration" => {
                Some(Box::new(sar::ApplyRadiometricCalibration::new()))
            }
            "applyradiometricterrainflattening" => {
                Some(Box::new(sar::ApplyRadiometricTerrainFlattening::new()))
            }
            "convertsarunits" => Some(Box::new(sar::ConvertSARUnits::new())),
            "despeckle" => Some(Box::new(sar::Despeckle::new())),
            "downloadorbitfile" => Some(Box::new(sar::DownloadOrbitFile::new())),
            "multilook" => Some(Box::new(sar::Multilook::new())),
            "removethermalnoise" => Some(Box::new(sar::RemoveThermalNoise::new())),

            // raster_generalization
            "aggregate" => Some(Box::new(raster_generalization::Aggregate::new())),
            "boundaryclean" => Some(Box::new(raster_generalization::BoundaryClean::new())),
            "expand" => Some(Box::new(raster_generalization::Expand::new())),
            "majorityfilter" => Some(Box::new(raster_generalization::MajorityFilter::new())),
            "nibble" => Some(Box::new(raster_generalization::Nibble::new())),
            "regiongroup" => Some(Box::new(raster_generalization::RegionGroup::new())),
            "shrink" => Some(Box::new(raster_generalization::Shrink::new())),
            "thin" => Some(Box::new(raster_generalization::Thin::new())),

            _ => None,
        }
    }

    pub fn run_tool(
        &self,
        tool_name: String,
        args: Vec<String>,
        env_args: Vec<String>,
    ) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => tool.run(args, env_args, &self.working_dir, self.verbose),
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn tool_help(&self, tool_name: String) -> Result<(), Error> {
        if !tool_name.is_empty() {
            match self.get_tool(tool_name.as_ref()) {
                Some(tool) => println!("{}", get_help(tool)),
                None => {
                    return Err(Error::new(
                        ErrorKind::NotFound,
                        format!("Unrecognized tool name {}.", tool_name),
                    ))
                }
            }
        } else {
            let mut i = 1;
            for val in &self.tool_names {
                let tool = self
                    .get_tool(&val)
                    .expect(&format!("Unrecognized tool name {}.", val));
                println!("{}. {}\n", i, get_help(tool));
                i += 1;
            }
        }
        Ok(())
    }

    pub fn tool_parameters(&self, tool_name: String) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => {
                println!("{}", tool.get_tool_parameters());
                Ok(())
            }
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn toolbox(&self, tool_name: String) -> Result<(), Error> {
        if !tool_name.is_empty() {
            match self.get_tool(tool_name.as_ref()) {
                Some(tool) => println!("{}", tool.get_toolbox()),
                None => {
                    return Err(Error::new(
                        ErrorKind::NotFound,
                        format!("Unrecognized tool name {}.", tool_name),
                    ))
                }
            }
        } else {
            let mut tool_details: Vec<(String, String)> = Vec::new();
            for val in &self.tool_names {
                let tool = self
                    .get_tool(&val)
                    .expect(&format!("Unrecognized tool name {}.", val));
                tool_details.push((val.to_string(), tool.get_toolbox()));
            }
            tool_details.sort();
            for i in 0..tool_details.len() {
                println!("{}: {}", tool_details[i].0, tool_details[i].1);
            }
        }
        Ok(())
    }

    pub fn valid_environments(&self, tool_name: String) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => {
                for key in tool.valid_environments() {
                    println!("{}", key.as_key());
                }
                Ok(())
            }
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn execute_name(&self, tool_name: String) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => {
                println!("{}", tool.get_execute_name());
                Ok(())
            }
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn list_tools(&self) {
        let mut tool_details: Vec<(String, String)> = Vec::new();
        for val in &self.tool_names {
            let tool = self
                .get_tool(&val)
                .expect(&format!("Unrecognized tool name {}.", val));
            tool_details.push(get_name_and_description(tool));
        }
        tool_details.sort();

        let mut ret = format!("All {} Available Tools:\n", tool_details.len());
        for i in 0..tool_details.len() {
            ret.push_str(&format!("{}: {}\n\n", tool_details[i].0, tool_details[i].1));
        }
        println!("{}", ret);
    }

    pub fn list_tools_with_keywords(&self, keywords: Vec<String>) {
        let mut tool_details: Vec<(String, String)> = Vec::new();
        for val in &self.tool_names {
            let tool = self
                .get_tool(&val)
                .expect(&format!("Unrecognized tool name {}.", val));
            let toolbox = tool.get_toolbox();
            let (nm, des) = get_name_and_description(tool);
            for kw in &keywords {
                if nm.to_lowercase().contains(&(kw.to_lowercase()))
                    || des.to_lowercase().contains(&(kw.to_lowercase()))
                    || toolbox.to_lowercase().contains(&(kw.to_lowercase()))
                {
                    tool_details.push((nm.clone(), des.clone()));
                    break;
                }
            }
        }

        let mut ret = format!("All {} Tools containing keywords:\n", tool_details.len());
        for i in 0..tool_details.len() {
            ret.push_str(&format!("{}: {}\n\n", tool_details[i].0, tool_details[i].1));
        }
        println!("{}", ret);
    }
}

/// A geoprocessing tool signature. Implementations are declarative: they
/// describe the external engine's call contract for one tool and carry no
/// algorithm of their own. `run` validates supplied values against the
/// signature and forwards the ordered parameter array to the engine.
pub trait GeoprocessingTool {
    fn get_tool_name(&self) -> String;
    fn get_display_name(&self) -> String;
    fn get_tool_description(&self) -> String;
    fn get_toolbox(&self) -> String;
    fn get_alias(&self) -> String;
    fn parameters(&self) -> &[ToolParameter];
    fn valid_environments(&self) -> &[EnvironmentKey];
    fn get_example_usage(&self) -> String;
    fn get_source_file(&self) -> String;

    /// Fully qualified name the engine is invoked with, e.g.
    /// `3d.AddFeatureClassToTerrain`.
    fn get_execute_name(&self) -> String {
        format!("{}.{}", self.get_alias(), self.get_tool_name())
    }

    fn get_tool_parameters(&self) -> String {
        match serde_json::to_string(&self.parameters()) {
            Ok(json_str) => format!("{{\"parameters\":{}}}", json_str),
            Err(err) => format!("{:?}", err),
        }
    }

    fn run(
        &self,
        args: Vec<String>,
        env_args: Vec<String>,
        working_directory: &str,
        verbose: bool,
    ) -> Result<(), Error> {
        dispatch(self, args, env_args, working_directory, verbose)
    }
}

fn get_help<'a>(gt: Box<dyn GeoprocessingTool + 'a>) -> String {
    let tool_name = gt.get_tool_name();
    let display_name = gt.get_display_name();
    let description = gt.get_tool_description();
    let toolbox = gt.get_toolbox();
    let execute_name = gt.get_execute_name();
    let mut p = String::new();
    p.push_str("Flag               Description\n");
    p.push_str("-----------------  -----------\n");
    for d in gt.parameters() {
        let mut s = String::new();
        for f in &d.flags {
            s.push_str(&format!("{}, ", f));
        }
        let trailer = match d.direction {
            ParameterDirection::Required => "",
            ParameterDirection::Optional => " (optional)",
            ParameterDirection::Derived => " (derived output)",
        };
        p.push_str(&format!(
            "{:width$} {}{}\n",
            s.trim().trim_matches(','),
            d.description,
            trailer,
            width = 18
        ));
    }
    let mut e = String::new();
    for key in gt.valid_environments() {
        e.push_str(&format!("{}, ", key.as_key()));
    }
    let example = gt.get_example_usage();
    format!(
        "{} ({})
Description:\n{}
Toolbox: {}
Execute name: {}
Parameters:\n
{}
Honored environments: {}

Example usage:
{}
",
        tool_name,
        display_name,
        description,
        toolbox,
        execute_name,
        p,
        e.trim().trim_matches(','),
        example
    )
}

fn get_name_and_description<'a>(gt: Box<dyn GeoprocessingTool + 'a>) -> (String, String) {
    (gt.get_tool_name(), gt.get_tool_description())
}

/// Builds the CLI example string printed in tool help.
pub fn example_usage(tool_name: &str, args: &str) -> String {
    let sep: String = path::MAIN_SEPARATOR.to_string();
    let e = match env::current_exe() {
        Ok(p) => format!("{}", p.display()),
        Err(_) => String::from("gptools"),
    };
    let mut parent = path::PathBuf::from(&e);
    parent.pop();
    let p = format!("{}", parent.display());
    let mut short_exe = e
        .replace(&p, "")
        .replace(".exe", "")
        .replace(".", "")
        .replace(&sep, "");
    if e.contains(".exe") {
        short_exe += ".exe";
    }
    format!(
        ">>.*{} -r={} -v --wd=\"*path*to*data*\" {}",
        short_exe, tool_name, args
    )
    .replace("*", &sep)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterDirection {
    Required,
    Optional,
    Derived,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CodedValue {
    pub code: String,
    pub label: String,
}

/// A closed set of legal engine tokens for a string parameter. Codes travel
/// on the wire; labels are for presentation only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CodedValueDomain {
    pub name: String,
    pub values: Vec<CodedValue>,
}

impl CodedValueDomain {
    pub fn new(name: &str, pairs: &[(&str, &str)]) -> CodedValueDomain {
        CodedValueDomain {
            name: name.to_string(),
            values: pairs
                .iter()
                .map(|(code, label)| CodedValue {
                    code: code.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.values.iter().any(|v| v.code == code)
    }

    pub fn codes(&self) -> Vec<String> {
        self.values.iter().map(|v| v.code.clone()).collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Any,
    Point,
    Multipoint,
    Line,
    Polygon,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Any,
    Integer,
    Float,
    Number,
    Text,
    Date,
}

/// Semantic geoprocessing data types, mirroring the engine's parameter
/// schema. Dataset-valued types are resolved against the working directory
/// before dispatch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ParameterType {
    Boolean,
    String,
    StringList,
    Long,
    Double,
    LinearUnit,
    ArealUnit,
    FeatureClass(GeometryType),
    FeatureLayer(GeometryType),
    FeatureDataset,
    RasterDataset,
    RasterLayer,
    MosaicDataset,
    TerrainDataset,
    TinDataset,
    LasDataset,
    NetCdfFile,
    Topology,
    TerritorySolution,
    Table,
    Field(AttributeType),
    Workspace,
    File,
    Folder,
    CoordinateSystem,
    Envelope,
    Composite(Vec<ParameterType>),
    CodedValue(CodedValueDomain),
}

impl ParameterType {
    /// Whether values of this type name something on disk that the working
    /// directory should be applied to.
    pub fn is_path_like(&self) -> bool {
        match self {
            ParameterType::FeatureClass(_)
            | ParameterType::FeatureDataset
            | ParameterType::RasterDataset
            | ParameterType::MosaicDataset
            | ParameterType::TerrainDataset
            | ParameterType::TinDataset
            | ParameterType::LasDataset
            | ParameterType::NetCdfFile
            | ParameterType::Topology
            | ParameterType::TerritorySolution
            | ParameterType::Table
            | ParameterType::Workspace
            | ParameterType::File
            | ParameterType::Folder => true,
            ParameterType::Composite(types) => types.iter().any(|t| t.is_path_like()),
            _ => false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ToolParameter {
    pub name: String,
    pub flags: Vec<String>,
    pub description: String,
    pub parameter_type: ParameterType,
    pub direction: ParameterDirection,
    pub default_value: Option<String>,
}

/// Execution-context options honored by some tools, with their engine wire
/// names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentKey {
    Workspace,
    ScratchWorkspace,
    Extent,
    OutputCoordinateSystem,
    GeographicTransformations,
    CellSize,
    SnapRaster,
    Mask,
    Compression,
    Pyramid,
    Nodata,
    TileSize,
    ParallelProcessingFactor,
    XyResolution,
    XyTolerance,
    XyDomain,
    ZResolution,
    ZTolerance,
    ZDomain,
    MResolution,
    MTolerance,
    MDomain,
    ReferenceScale,
    CartographicCoordinateSystem,
    CartographicPartitions,
    AutoCommit,
    ConfigKeyword,
    OutputZFlag,
    OutputZValue,
    OutputMFlag,
    ExtentOfInterest,
    TerrainMemoryUsage,
}

impl EnvironmentKey {
    pub fn as_key(&self) -> &'static str {
        match self {
            EnvironmentKey::Workspace => "workspace",
            EnvironmentKey::ScratchWorkspace => "scratchWorkspace",
            EnvironmentKey::Extent => "extent",
            EnvironmentKey::OutputCoordinateSystem => "outputCoordinateSystem",
            EnvironmentKey::GeographicTransformations => "geographicTransformations",
            EnvironmentKey::CellSize => "cellSize",
            EnvironmentKey::SnapRaster => "snapRaster",
            EnvironmentKey::Mask => "mask",
            EnvironmentKey::Compression => "compression",
            EnvironmentKey::Pyramid => "pyramid",
            EnvironmentKey::Nodata => "nodata",
            EnvironmentKey::TileSize => "tileSize",
            EnvironmentKey::ParallelProcessingFactor => "parallelProcessingFactor",
            EnvironmentKey::XyResolution => "XYResolution",
            EnvironmentKey::XyTolerance => "XYTolerance",
            EnvironmentKey::XyDomain => "XYDomain",
            EnvironmentKey::ZResolution => "ZResolution",
            EnvironmentKey::ZTolerance => "ZTolerance",
            EnvironmentKey::ZDomain => "ZDomain",
            EnvironmentKey::MResolution => "MResolution",
            EnvironmentKey::MTolerance => "MTolerance",
            EnvironmentKey::MDomain => "MDomain",
            EnvironmentKey::ReferenceScale => "referenceScale",
            EnvironmentKey::CartographicCoordinateSystem => "cartographicCoordinateSystem",
            EnvironmentKey::CartographicPartitions => "cartographicPartitions",
            EnvironmentKey::AutoCommit => "autoCommit",
            EnvironmentKey::ConfigKeyword => "configKeyword",
            EnvironmentKey::OutputZFlag => "outputZFlag",
            EnvironmentKey::OutputZValue => "outputZValue",
            EnvironmentKey::OutputMFlag => "outputMFlag",
            EnvironmentKey::ExtentOfInterest => "extentOfInterest",
            EnvironmentKey::TerrainMemoryUsage => "terrainMemoryUsage",
        }
    }

    pub fn from_key(key: &str) -> Option<EnvironmentKey> {
        let all = [
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::GeographicTransformations,
            EnvironmentKey::CellSize,
            EnvironmentKey::SnapRaster,
            EnvironmentKey::Mask,
            EnvironmentKey::Compression,
            EnvironmentKey::Pyramid,
            EnvironmentKey::Nodata,
            EnvironmentKey::TileSize,
            EnvironmentKey::ParallelProcessingFactor,
            EnvironmentKey::XyResolution,
            EnvironmentKey::XyTolerance,
            EnvironmentKey::XyDomain,
            EnvironmentKey::ZResolution,
            EnvironmentKey::ZTolerance,
            EnvironmentKey::ZDomain,
            EnvironmentKey::MResolution,
            EnvironmentKey::MTolerance,
            EnvironmentKey::MDomain,
            EnvironmentKey::ReferenceScale,
            EnvironmentKey::CartographicCoordinateSystem,
            EnvironmentKey::CartographicPartitions,
            EnvironmentKey::AutoCommit,
            EnvironmentKey::ConfigKeyword,
            EnvironmentKey::OutputZFlag,
            EnvironmentKey::OutputZValue,
            EnvironmentKey::OutputMFlag,
            EnvironmentKey::ExtentOfInterest,
            EnvironmentKey::TerrainMemoryUsage,
        ];
        all.iter()
            .find(|k| k.as_key().eq_ignore_ascii_case(key))
            .copied()
    }
}

/// Collects flag-addressed argument values into the tool's ordered parameter
/// array. Required parameters must resolve to a value; optional and derived
/// slots fall back to the `#` placeholder; coded values must be a member of
/// their domain.
pub fn collect_parameter_values(
    parameters: &[ToolParameter],
    args: &[String],
) -> Result<Vec<String>, Error> {
    let mut supplied: Vec<Option<String>> = vec![None; parameters.len()];
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].replace("\"", "").replace("\'", "");
        let cmd = arg.split("="); // in case an equals sign was used
        let vec = cmd.collect::<Vec<&str>>();
        let keyval = vec.len() > 1;
        let flag_val = vec[0].to_lowercase().replace("--", "-");
        let pos = parameters.iter().position(|p| {
            p.flags
                .iter()
                .any(|f| f.to_lowercase().replace("--", "-") == flag_val)
        });
        match pos {
            Some(idx) => {
                let p = &parameters[idx];
                if p.direction == ParameterDirection::Derived {
                    return Err(Error::new(
                        ErrorKind::InvalidInput,
                        format!(
                            "Parameter '{}' is a derived output and cannot be supplied.",
                            p.name
                        ),
                    ));
                }
                let value = if keyval {
                    vec[1..].join("=")
                } else if p.parameter_type == ParameterType::Boolean {
                    // a bare boolean flag means true
                    "true".to_string()
                } else {
                    i += 1;
                    match args.get(i) {
                        Some(v) => v.replace("\"", "").replace("\'", ""),
                        None => {
                            return Err(Error::new(
                                ErrorKind::InvalidInput,
                                format!("Flag {} supplied without a value.", vec[0]),
                            ))
                        }
                    }
                };
                supplied[idx] = Some(value);
            }
            None => {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Unrecognized flag {}.", vec[0]),
                ))
            }
        }
        i += 1;
    }

    let mut values = Vec::with_capacity(parameters.len());
    for (p, v) in parameters.iter().zip(supplied) {
        let v = match v {
            Some(v) => Some(v),
            None => {
                if p.direction == ParameterDirection::Derived {
                    None
                } else {
                    p.default_value.clone()
                }
            }
        };
        match v {
            Some(val) => {
                if let ParameterType::CodedValue(ref domain) = p.parameter_type {
                    if !domain.contains(&val) {
                        return Err(Error::new(
                            ErrorKind::InvalidInput,
                            format!(
                                "Value '{}' is not a member of the {} domain; expected one of: {}.",
                                val,
                                domain.name,
                                domain.codes().join(", ")
                            ),
                        ));
                    }
                }
                values.push(val);
            }
            None => {
                if p.direction == ParameterDirection::Required {
                    return Err(Error::new(
                        ErrorKind::InvalidInput,
                        format!("Required parameter '{}' not specified.", p.name),
                    ));
                }
                values.push(UNSET.to_string());
            }
        }
    }
    Ok(values)
}

/// Validates `key=value` environment pairs against the keys a tool honors.
pub fn collect_environment(
    valid: &[EnvironmentKey],
    env_args: &[String],
) -> Result<BTreeMap<String, String>, Error> {
    let mut environment = BTreeMap::new();
    for pair in env_args {
        let mut split = pair.splitn(2, '=');
        let key = split.next().unwrap_or("").trim();
        let value = match split.next() {
            Some(v) => v.trim(),
            None => {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Environment setting '{}' is not a key=value pair.", pair),
                ))
            }
        };
        let env_key = match EnvironmentKey::from_key(key) {
            Some(k) => k,
            None => {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Unrecognized environment setting '{}'.", key),
                ))
            }
        };
        if !valid.contains(&env_key) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "The environment setting '{}' is not honored by this tool.",
                    env_key.as_key()
                ),
            ));
        }
        environment.insert(env_key.as_key().to_string(), value.to_string());
    }
    Ok(environment)
}

/// The shared dispatch path: validate, resolve paths against the working
/// directory, invoke the engine, report derived outputs.
pub fn dispatch<T: GeoprocessingTool + ?Sized>(
    tool: &T,
    args: Vec<String>,
    env_args: Vec<String>,
    working_directory: &str,
    verbose: bool,
) -> Result<(), Error> {
    if args.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "Tool run with no parameters.",
        ));
    }
    let mut values = collect_parameter_values(tool.parameters(), &args)?;
    let environment = collect_environment(tool.valid_environments(), &env_args)?;

    let sep: String = path::MAIN_SEPARATOR.to_string();
    for (p, v) in tool.parameters().iter().zip(values.iter_mut()) {
        if p.parameter_type.is_path_like()
            && v != UNSET
            && !v.contains(&sep)
            && !v.contains("/")
            && !working_directory.is_empty()
        {
            *v = format!("{}{}", working_directory, v);
        }
    }

    if verbose {
        let tool_name = tool.get_tool_name();
        // floored at the width of the "Powered by" line below
        let welcome_len = format!("* Welcome to {} *", tool_name).len().max(22);
        println!("{}", "*".repeat(welcome_len));
        println!(
            "* Welcome to {} {}*",
            tool_name,
            " ".repeat(welcome_len - 15 - tool_name.len())
        );
        println!("* Powered by GPTools {}*", " ".repeat(welcome_len - 22));
        println!("{}", "*".repeat(welcome_len));
    }

    let start = Instant::now();
    let client = EngineClient::locate()?;
    let request = EngineRequest {
        tool: tool.get_execute_name(),
        parameters: values,
        environment: environment,
    };
    let response = client.execute(&request)?;

    if verbose {
        for msg in &response.messages {
            println!("{}", msg);
        }
        for (name, value) in &response.outputs {
            println!("{}: {}", name, value);
        }
        println!(
            "{}",
            &format!("Elapsed Time (excluding I/O): {}", get_formatted_elapsed_time(start))
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(name: &str, flag: &str, pt: ParameterType) -> ToolParameter {
        ToolParameter {
            name: name.to_string(),
            flags: vec![flag.to_string()],
            description: String::new(),
            parameter_type: pt,
            direction: ParameterDirection::Required,
            default_value: None,
        }
    }

    #[test]
    fn registry_resolves_every_registered_name() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in tm.tool_names() {
            let tool = tm.get_tool(name);
            assert!(tool.is_some(), "tool {} did not resolve", name);
            assert_eq!(&tool.unwrap().get_tool_name(), name);
        }
    }

    #[test]
    fn lookup_is_case_and_underscore_insensitive() {
        let tm = ToolManager::new("", &false).unwrap();
        assert!(tm.get_tool("region_group").is_some());
        assert!(tm.get_tool("REGIONGROUP").is_some());
        assert!(tm.get_tool("NoSuchTool").is_none());
    }

    #[test]
    fn execute_names_are_alias_qualified() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in tm.tool_names() {
            let tool = tm.get_tool(name).unwrap();
            assert_eq!(
                tool.get_execute_name(),
                format!("{}.{}", tool.get_alias(), name)
            );
        }
    }

    #[test]
    fn every_tool_declares_parameters_and_environments() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in tm.tool_names() {
            let tool = tm.get_tool(name).unwrap();
            assert!(!tool.parameters().is_empty(), "{} has no parameters", name);
            assert!(
                !tool.valid_environments().is_empty(),
                "{} honors no environments",
                name
            );
            // derived outputs are engine-assigned and must not be addressable
            for p in tool.parameters() {
                if p.direction == ParameterDirection::Derived {
                    assert!(p.flags.is_empty(), "{}: derived '{}' has flags", name, p.name);
                } else {
                    assert!(!p.flags.is_empty(), "{}: '{}' has no flags", name, p.name);
                }
            }
        }
    }

    #[test]
    fn tool_parameter_json_is_well_formed() {
        let tm = ToolManager::new("", &false).unwrap();
        let tool = tm.get_tool("RegionGroup").unwrap();
        let v: serde_json::Value = serde_json::from_str(&tool.get_tool_parameters()).unwrap();
        let a = v["parameters"].as_array().unwrap();
        assert_eq!(a.len(), tool.parameters().len());
        assert_eq!(a[0]["name"].as_str().unwrap(), tool.parameters()[0].name);
    }

    #[test]
    fn missing_required_parameter_is_rejected() {
        let params = vec![
            required("Input Raster", "--in_raster", ParameterType::RasterDataset),
            required("Output Raster", "--out_raster", ParameterType::RasterDataset),
        ];
        let args = vec!["--in_raster=dem.tif".to_string()];
        let err = collect_parameter_values(&params, &args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn optional_parameters_fall_back_to_default_then_placeholder() {
        let mut params = vec![required(
            "Input Raster",
            "--in_raster",
            ParameterType::RasterDataset,
        )];
        params.push(ToolParameter {
            name: "Cell Factor".to_string(),
            flags: vec!["--cell_factor".to_string()],
            description: String::new(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: Some("3".to_string()),
        });
        params.push(ToolParameter {
            name: "Excluded Value".to_string(),
            flags: vec!["--excluded_value".to_string()],
            description: String::new(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: None,
        });
        let args = vec!["--in_raster=dem.tif".to_string()];
        let values = collect_parameter_values(&params, &args).unwrap();
        assert_eq!(values, vec!["dem.tif", "3", UNSET]);
    }

    #[test]
    fn coded_value_outside_domain_is_rejected() {
        let domain = CodedValueDomain::new(
            "Number of Neighbors",
            &[("FOUR", "Four"), ("EIGHT", "Eight")],
        );
        let params = vec![required(
            "Number of Neighbors",
            "--number_neighbors",
            ParameterType::CodedValue(domain),
        )];
        let args = vec!["--number_neighbors=SIX".to_string()];
        let err = collect_parameter_values(&params, &args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("FOUR"));
    }

    #[test]
    fn derived_parameters_reject_caller_values() {
        let params = vec![ToolParameter {
            name: "Updated Terrain".to_string(),
            flags: vec![],
            description: String::new(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Derived,
            default_value: None,
        }];
        // no flag addresses the derived slot, so any arg is unrecognized
        let args = vec!["--derived_out=terrain".to_string()];
        assert!(collect_parameter_values(&params, &args).is_err());
        // and with no args at all the slot forwards as a placeholder
        let values = collect_parameter_values(&params, &[]).unwrap();
        assert_eq!(values, vec![UNSET]);
    }

    #[test]
    fn bare_boolean_flag_means_true() {
        let params = vec![ToolParameter {
            name: "Overview".to_string(),
            flags: vec!["--overview".to_string()],
            description: String::new(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("false".to_string()),
        }];
        let values = collect_parameter_values(&params, &["--overview".to_string()]).unwrap();
        assert_eq!(values, vec!["true"]);
    }

    #[test]
    fn environment_keys_round_trip_and_unknowns_fail() {
        assert_eq!(
            EnvironmentKey::from_key("scratchWorkspace"),
            Some(EnvironmentKey::ScratchWorkspace)
        );
        assert_eq!(
            EnvironmentKey::from_key("XYTOLERANCE"),
            Some(EnvironmentKey::XyTolerance)
        );
        assert_eq!(EnvironmentKey::from_key("noSuchKey"), None);
    }

    #[test]
    fn environment_pairs_are_validated_against_the_tool() {
        let valid = vec![EnvironmentKey::Workspace, EnvironmentKey::Extent];
        let env = collect_environment(
            &valid,
            &["workspace=/data/gp.gdb".to_string(), "extent=0 0 10 10".to_string()],
        )
        .unwrap();
        assert_eq!(env.get("workspace").unwrap(), "/data/gp.gdb");
        assert_eq!(env.get("extent").unwrap(), "0 0 10 10");

        let err = collect_environment(&valid, &["cellSize=30".to_string()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let err = collect_environment(&valid, &["workspace".to_string()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn verbose_banner_handles_short_tool_names() {
        // The banner pads every line to the width of its longest fixed line,
        // so a tool name shorter than "Powered by GPTools" must not break it.
        let tm = ToolManager::new("", &true).unwrap();
        for (name, args) in [
            ("Thin", vec!["-i=a.tif", "-o=b.tif"]),
            ("Nibble", vec!["-i=a.tif", "--in_mask_raster=m.tif", "-o=b.tif"]),
            (
                "Expand",
                vec!["-i=a.tif", "-o=b.tif", "--number_cells=1", "--zone_values=5"],
            ),
            (
                "Shrink",
                vec!["-i=a.tif", "-o=b.tif", "--number_cells=1", "--zone_values=5"],
            ),
        ] {
            let tool = tm.get_tool(name).unwrap();
            let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
            // No engine is configured, so the run errs after the banner prints.
            assert!(tool.run(args, vec![], "", true).is_err(), "{}", name);
        }
    }

    #[test]
    fn tool_help_carries_the_display_name() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in &tm.tool_names {
            let tool = tm.get_tool(name).unwrap();
            assert!(!tool.get_display_name().is_empty(), "{}", name);
        }
        let tool = tm.get_tool("RegionGroup").unwrap();
        assert_eq!(tool.get_display_name(), "Region Group");
        let help = get_help(tool);
        assert!(help.starts_with("RegionGroup (Region Group)"));
        assert!(help.contains("Execute name: sa.RegionGroup"));
    }
}
