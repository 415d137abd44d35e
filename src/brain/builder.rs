// RequestBuilder - type-safe chainable builder for GenerateRequest

use super::{Content, GenerateRequest, GenerationConfig};

const JSON_MIME_TYPE: &str = "application/json";

pub struct RequestBuilder {
    model: String,
    system: Option<String>,
    contents: Vec<Content>,
    max_output_tokens: Option<u32>,
    temperature: Option<f32>,
    json_output: bool,
}

impl RequestBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: None,
            contents: Vec::new(),
            max_output_tokens: None,
            temperature: None,
            json_output: false,
        }
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn user_text(mut self, content: impl Into<String>) -> Self {
        self.contents.push(Content::user_text(content));
        self
    }

    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Request structured (JSON) output
    pub fn json_output(mut self, json_output: bool) -> Self {
        self.json_output = json_output;
        self
    }

    pub fn build(self) -> Result<GenerateRequest, &'static str> {
        if self.model.trim().is_empty() {
            return Err("model cannot be empty");
        }

        if self.contents.is_empty() {
            return Err("contents cannot be empty");
        }

        if self
            .contents
            .iter()
            .all(|c| c.parts.iter().all(|p| p.text.trim().is_empty()))
        {
            return Err("prompt text cannot be blank");
        }

        if let Some(t) = self.temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err("temperature must be within 0.0..=2.0");
        }

        Ok(GenerateRequest {
            model: self.model,
            system_instruction: self.system.map(Content::system_text),
            contents: self.contents,
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
                response_mime_type: self.json_output.then(|| JSON_MIME_TYPE.to_string()),
            },
        })
    }
}
