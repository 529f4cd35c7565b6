use super::document::{
    ContainerSpec, ContainerTemplate, Inputs, NameValue, ResourceList, Resources,
};

/// Path of the task runner inside the SDK image; the subcommand selects the
/// operation.
const RUNNER: &str = "/app/pipeline/cli.py";

/// Every operation kind the palette can place on the canvas.
///
/// Node type strings coming from the editor resolve to exactly one of these
/// variants; an unrecognized string is a compile error, never a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    LoadDataset,
    Join,
    Correlation,
    Condition,
    Observation,
    Cluster,
    Frequency,
    Range,
    Std,
    Mode,
    Median,
    Mean,
    Abbreviate,
    Plot,
    GenerateReport,
    SymptomPattern,
    Covariance,
    CorrCoefficient,
    Prevalence,
}

impl OperationKind {
    /// Parses the node type string used by the editor palette.
    pub fn parse(type_name: &str) -> Option<Self> {
        match type_name {
            "load-dataset" => Some(Self::LoadDataset),
            "join" => Some(Self::Join),
            "correlation" => Some(Self::Correlation),
            "condition" => Some(Self::Condition),
            "observation" => Some(Self::Observation),
            "cluster" => Some(Self::Cluster),
            "frequency" => Some(Self::Frequency),
            "range" => Some(Self::Range),
            "std" => Some(Self::Std),
            "mode" => Some(Self::Mode),
            "median" => Some(Self::Median),
            "mean" => Some(Self::Mean),
            "abbreviate" => Some(Self::Abbreviate),
            "plot" => Some(Self::Plot),
            "generate-report" => Some(Self::GenerateReport),
            "symptom-pattern" => Some(Self::SymptomPattern),
            "covariance" => Some(Self::Covariance),
            "corr-coefficient" => Some(Self::CorrCoefficient),
            "prevalence" => Some(Self::Prevalence),
            _ => None,
        }
    }

    /// The base template name this kind specializes from, which doubles as
    /// the runner subcommand.
    pub fn template_name(self) -> &'static str {
        match self {
            Self::LoadDataset => "download-data",
            Self::Join => "join",
            Self::Correlation => "correlation",
            Self::Condition => "condition",
            Self::Observation => "observation",
            Self::Cluster => "cluster",
            Self::Frequency => "frequency",
            Self::Range => "range",
            Self::Std => "std",
            Self::Mode => "mode",
            Self::Median => "median",
            Self::Mean => "mean",
            Self::Abbreviate => "abbreviate",
            Self::Plot => "plot",
            Self::GenerateReport => "generate-report",
            Self::SymptomPattern => "symptom-pattern",
            Self::Covariance => "covariance",
            Self::CorrCoefficient => "corr-coefficient",
            Self::Prevalence => "prevalence",
        }
    }

    /// Builds this kind's base container template: the starting point every
    /// per-node specialization is cloned from.
    pub fn base_template(self, image: &str) -> ContainerTemplate {
        ContainerTemplate {
            name: self.template_name().to_string(),
            inputs: Inputs::default(),
            container: ContainerSpec {
                image: image.to_string(),
                command: vec![
                    "python".to_string(),
                    RUNNER.to_string(),
                    self.template_name().to_string(),
                ],
                args: Vec::new(),
                resources: Some(Resources {
                    limits: ResourceList {
                        memory: "2Gi".to_string(),
                        cpu: "2".to_string(),
                    },
                    requests: ResourceList {
                        memory: "1Gi".to_string(),
                        cpu: "1".to_string(),
                    },
                }),
                env: vec![NameValue {
                    name: "PYTHONUNBUFFERED".to_string(),
                    value: "1".to_string(),
                }],
                volume_mounts: Vec::new(),
            },
        }
    }
}
