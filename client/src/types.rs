use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    Physical,
    Chemical,
    Biological,
    Ergonomic,
    Accident,
}

impl RiskType {
    /// Wire form, as the API expects it in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskType::Physical => "PHYSICAL",
            RiskType::Chemical => "CHEMICAL",
            RiskType::Biological => "BIOLOGICAL",
            RiskType::Ergonomic => "ERGONOMIC",
            RiskType::Accident => "ACCIDENT",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskIntensity {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    EmployerEstablishment,
    ThirdPartyEstablishment,
    Mobile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRiskCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NewRiskCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            color: None,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl RiskCategoryUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Abbreviated category embedded in risk responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub allows_intensity: bool,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub active: bool,
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRisk {
    pub category_id: String,
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_intensity: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global: Option<bool>,
}

impl NewRisk {
    pub fn new(
        category_id: impl Into<String>,
        risk_type: RiskType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            risk_type,
            name: name.into(),
            code: None,
            description: None,
            allows_intensity: None,
            is_global: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_allows_intensity(mut self, allows_intensity: bool) -> Self {
        self.allows_intensity = Some(allows_intensity);
        self
    }

    pub fn with_is_global(mut self, is_global: bool) -> Self {
        self.is_global = Some(is_global);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_intensity: Option<bool>,
}

impl RiskUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Query filters for risk listings. Serializes straight into query
/// parameters; unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub risk_type: Option<RiskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl RiskFilter {
    pub fn by_type(risk_type: RiskType) -> Self {
        Self {
            risk_type: Some(risk_type),
            ..Self::default()
        }
    }

    pub fn by_category(category_id: impl Into<String>) -> Self {
        Self {
            category_id: Some(category_id.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub location_type: LocationType,
    pub description: Option<String>,
    #[serde(default)]
    pub registered_in_e_social: bool,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnvironment {
    pub company_id: String,
    pub name: String,
    pub location_type: LocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_in_e_social: Option<bool>,
}

impl NewEnvironment {
    pub fn new(
        company_id: impl Into<String>,
        name: impl Into<String>,
        location_type: LocationType,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            name: name.into(),
            location_type,
            description: None,
            registered_in_e_social: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_registered_in_e_social(mut self, registered: bool) -> Self {
        self.registered_in_e_social = Some(registered);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
}

impl EnvironmentUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl EnvironmentFilter {
    pub fn by_company(company_id: impl Into<String>) -> Self {
        Self {
            company_id: Some(company_id.into()),
            ..Self::default()
        }
    }
}

/// Abbreviated risk embedded in link records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub risk_type: Option<RiskType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentRisk {
    pub id: String,
    pub risk_id: Option<String>,
    pub intensity: Option<RiskIntensity>,
    pub notes: Option<String>,
    pub risk: Option<RiskRef>,
}

impl EnvironmentRisk {
    /// Linked risk id, from the flat field or the embedded risk.
    pub fn linked_risk_id(&self) -> Option<&str> {
        self.risk_id
            .as_deref()
            .or_else(|| self.risk.as_ref().map(|r| r.id.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentRiskLink {
    pub risk_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<RiskIntensity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl EnvironmentRiskLink {
    pub fn new(risk_id: impl Into<String>) -> Self {
        Self {
            risk_id: risk_id.into(),
            intensity: None,
            notes: None,
        }
    }

    pub fn with_intensity(mut self, intensity: RiskIntensity) -> Self {
        self.intensity = Some(intensity);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub cbo: String,
    pub main_environment_id: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub company_id: String,
    pub title: String,
    pub cbo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_environment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_ids: Option<Vec<String>>,
}

impl NewJob {
    pub fn new(
        company_id: impl Into<String>,
        title: impl Into<String>,
        cbo: impl Into<String>,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            title: title.into(),
            cbo: cbo.into(),
            main_environment_id: None,
            environment_ids: None,
            risk_ids: None,
        }
    }

    pub fn with_main_environment(mut self, environment_id: impl Into<String>) -> Self {
        self.main_environment_id = Some(environment_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cbo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_environment_id: Option<String>,
}

impl JobUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobNotes {
    pub activities: Option<String>,
    pub general_recommendations: Option<String>,
    pub ergonomic_methodology: Option<String>,
    pub general_observations: Option<String>,
    #[serde(rename = "technicalOpinionLTCAT")]
    pub technical_opinion_ltcat: Option<String>,
    pub technical_opinion_danger: Option<String>,
    pub technical_opinion_insalubrity: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobNotesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_recommendations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ergonomic_methodology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_observations: Option<String>,
    #[serde(
        rename = "technicalOpinionLTCAT",
        skip_serializing_if = "Option::is_none"
    )]
    pub technical_opinion_ltcat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_opinion_danger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_opinion_insalubrity: Option<String>,
}

impl JobNotesUpdate {
    pub fn activities(mut self, activities: impl Into<String>) -> Self {
        self.activities = Some(activities.into());
        self
    }

    pub fn general_recommendations(mut self, recommendations: impl Into<String>) -> Self {
        self.general_recommendations = Some(recommendations.into());
        self
    }
}

/// Abbreviated environment embedded in link records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEnvironment {
    pub id: String,
    pub environment_id: Option<String>,
    pub environment: Option<EnvironmentRef>,
}

impl JobEnvironment {
    pub fn linked_environment_id(&self) -> Option<&str> {
        self.environment_id
            .as_deref()
            .or_else(|| self.environment.as_ref().map(|e| e.id.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEnvironmentLink {
    pub environment_id: String,
}

impl JobEnvironmentLink {
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRisk {
    pub id: String,
    pub risk_id: Option<String>,
    pub intensity: Option<RiskIntensity>,
    pub notes: Option<String>,
    pub risk: Option<RiskRef>,
}

impl JobRisk {
    pub fn linked_risk_id(&self) -> Option<&str> {
        self.risk_id
            .as_deref()
            .or_else(|| self.risk.as_ref().map(|r| r.id.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRiskLink {
    pub risk_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<RiskIntensity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl JobRiskLink {
    pub fn new(risk_id: impl Into<String>) -> Self {
        Self {
            risk_id: risk_id.into(),
            intensity: None,
            notes: None,
        }
    }

    pub fn with_intensity(mut self, intensity: RiskIntensity) -> Self {
        self.intensity = Some(intensity);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobExam {
    pub id: Option<String>,
    pub exam_name: String,
    pub exam_type: Option<String>,
    pub is_required: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobExam {
    pub exam_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewJobExam {
    pub fn new(exam_name: impl Into<String>) -> Self {
        Self {
            exam_name: exam_name.into(),
            exam_type: None,
            is_required: None,
            notes: None,
        }
    }

    pub fn with_exam_type(mut self, exam_type: impl Into<String>) -> Self {
        self.exam_type = Some(exam_type.into());
        self
    }

    pub fn with_is_required(mut self, is_required: bool) -> Self {
        self.is_required = Some(is_required);
        self
    }
}

/// Fixture source only; everything beyond the id is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: Option<String>,
}
