//! Configuration for AI play and batch runs

/// AI configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AiConfig {
    /// Random seed for reproducibility (None = 42)
    pub seed: Option<u64>,
}

impl AiConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Batch configuration for AI-vs-AI games
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Number of games to play
    pub games: usize,
    /// Safety cap on actions per game
    pub max_actions: usize,
    /// AI configuration for both sides
    pub ai: AiConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            games: 100,
            max_actions: 64,
            ai: AiConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Create config playing `games` games
    pub fn new(games: usize) -> Self {
        Self {
            games,
            ..Default::default()
        }
    }

    /// Set AI configuration
    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }

    pub fn with_max_actions(mut self, max_actions: usize) -> Self {
        self.max_actions = max_actions;
        self
    }
}
