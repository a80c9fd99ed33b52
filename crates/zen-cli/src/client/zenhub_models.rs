use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub pipelines: Vec<Pipeline>,
}

impl Board {
    /// Case-insensitive lookup by pipeline name.
    pub fn find_pipeline(&self, name: &str) -> Option<&Pipeline> {
        let wanted = name.to_lowercase();
        self.pipelines
            .iter()
            .find(|pipeline| pipeline.name.to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pipeline {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub issues: Vec<BoardIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardIssue {
    pub issue_number: u64,
}

#[derive(Debug, Serialize)]
pub struct PipelineMove<'a> {
    pub pipeline_id: &'a str,
    pub position: &'a str,
}
