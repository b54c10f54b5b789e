use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use backoffice_core::{CargoId, Entity, FieldErrors, Form, PersonalId, Validator, timestamp};

/// Supervisor summary joined into a personal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorInfo {
    pub supervisor_id: PersonalId,
    pub nombres: String,
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: Option<String>,
    #[serde(default)]
    pub nombre_completo: String,
}

/// Employee as returned by `/api/personal`.
///
/// `supervisor_id` is a nullable self-reference; cargo and supervisor
/// details are joined in by the service for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub personal_id: PersonalId,
    pub dni: String,
    pub nombres: String,
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default, with = "backoffice_core::timestamp::date_option")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default, with = "backoffice_core::timestamp::date_option")]
    pub fecha_ingreso: Option<NaiveDate>,
    pub cargo_id: CargoId,
    #[serde(default)]
    pub foto: Option<String>,
    #[serde(default)]
    pub supervisor_id: Option<PersonalId>,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub fecha_creacion: Option<NaiveDateTime>,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub fecha_modificacion: Option<NaiveDateTime>,
    #[serde(default)]
    pub estado: Option<bool>,
    #[serde(default)]
    pub nombre_cargo: Option<String>,
    #[serde(default)]
    pub descripcion_cargo: Option<String>,
    #[serde(default)]
    pub sueldo: Option<f64>,
    #[serde(default)]
    pub supervisor: Option<SupervisorInfo>,
    #[serde(default)]
    pub nombre_completo: Option<String>,
}

impl Personal {
    /// Service-computed full name, or `nombres apellidoPaterno [apellidoMaterno]`.
    pub fn full_name(&self) -> String {
        if let Some(name) = self.nombre_completo.as_ref().filter(|n| !n.trim().is_empty()) {
            return name.clone();
        }
        let mut parts = vec![self.nombres.as_str(), self.apellido_paterno.as_str()];
        if let Some(m) = self.apellido_materno.as_deref().filter(|m| !m.trim().is_empty()) {
            parts.push(m);
        }
        parts.join(" ")
    }
}

impl Entity for Personal {
    type Id = PersonalId;

    fn id(&self) -> PersonalId {
        self.personal_id
    }

    /// `nombres apellidoPaterno`, as shown in delete confirmations.
    fn label(&self) -> String {
        format!("{} {}", self.nombres, self.apellido_paterno)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRequest {
    pub dni: String,
    pub nombres: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "backoffice_core::timestamp::date_option"
    )]
    pub fecha_nacimiento: Option<NaiveDate>,
    pub cargo_id: CargoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<PersonalId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalForm {
    pub dni: String,
    pub nombres: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    /// `YYYY-MM-DD`, blank when unknown.
    pub fecha_nacimiento: String,
    pub cargo_id: Option<CargoId>,
    pub supervisor_id: Option<PersonalId>,
}

impl Form for PersonalForm {
    type Entity = Personal;
    type Request = PersonalRequest;

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.text("dni", &self.dni).required().min_len(8).max_len(20);
        v.text("nombres", &self.nombres).required().min_len(2).max_len(100);
        v.text("apellidoPaterno", &self.apellido_paterno).required().min_len(2).max_len(100);
        v.text("apellidoMaterno", &self.apellido_materno).max_len(100);
        v.text("telefono", &self.telefono).max_len(20);
        v.text("email", &self.email).email().max_len(150);
        v.text("direccion", &self.direccion).max_len(300);
        v.text("fechaNacimiento", &self.fecha_nacimiento).date();
        v.present("cargoId", self.cargo_id.as_ref());
        v.finish()
    }

    fn to_request(&self) -> PersonalRequest {
        PersonalRequest {
            dni: self.dni.trim().to_string(),
            nombres: self.nombres.trim().to_string(),
            apellido_paterno: self.apellido_paterno.trim().to_string(),
            apellido_materno: self.apellido_materno.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            email: self.email.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
            fecha_nacimiento: timestamp::parse_date(&self.fecha_nacimiento),
            cargo_id: self.cargo_id.unwrap_or(CargoId::new(0)),
            supervisor_id: self.supervisor_id,
        }
    }

    fn from_entity(p: &Personal) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            dni: p.dni.clone(),
            nombres: p.nombres.clone(),
            apellido_paterno: p.apellido_paterno.clone(),
            apellido_materno: text(&p.apellido_materno),
            telefono: text(&p.telefono),
            email: text(&p.email),
            direccion: text(&p.direccion),
            fecha_nacimiento: p
                .fecha_nacimiento
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            cargo_id: Some(p.cargo_id),
            supervisor_id: p.supervisor_id,
        }
    }
}
