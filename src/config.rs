use crate::*;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Maximum number of bounces traced per pixel.
    pub max_depth: usize,
    pub nthread: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 200,
            height: 200,
            max_depth: 3,
            nthread: num_cpus::get(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "image must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_depth == 0 {
            return Err(Error::InvalidConfig("max_depth must be positive".into()));
        }
        if self.nthread == 0 {
            return Err(Error::InvalidConfig("nthread must be positive".into()));
        }
        Ok(())
    }
}
