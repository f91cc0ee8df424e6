// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReviewInput {
    stars: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    commentary: Option<String>,
}

impl ReviewInput {
    #[must_use]
    pub fn builder() -> ReviewInputBuilder {
        ReviewInputBuilder::default()
    }

    fn from_builder(builder: ReviewInputBuilder) -> Result<Self, crate::api::RequiredFieldMissing> {
        Ok(Self {
            stars: builder.stars.ok_or_else(|| crate::api::RequiredFieldMissing::new("ReviewInput", "stars"))?,
            commentary: builder.commentary,
        })
    }

    pub fn stars(&self) -> &i32 {
        &self.stars
    }

    pub fn commentary(&self) -> &Option<String> {
        &self.commentary
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewInputBuilder {
    stars: Option<i32>,
    commentary: Option<String>,
}

impl ReviewInputBuilder {
    #[must_use]
    pub fn stars(mut self, value: i32) -> Self {
        self.stars = Some(value);
        self
    }

    #[must_use]
    pub fn commentary(mut self, value: String) -> Self {
        self.commentary = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns `RequiredFieldMissing` naming the first unset required field.
    pub fn build(self) -> Result<ReviewInput, crate::api::RequiredFieldMissing> {
        ReviewInput::from_builder(self)
    }
}
