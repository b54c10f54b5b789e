use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use backoffice_core::{CargoId, Entity, FieldErrors, Form, Validator};

/// Job position as returned by `/api/cargo`.
///
/// Cargos are soft-deleted: a delete flips `estado` to `false` on the
/// service side instead of removing the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cargo {
    pub cargo_id: CargoId,
    pub nombre_cargo: String,
    #[serde(default)]
    pub descripcion: String,
    pub sueldo: f64,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub fecha_creacion: Option<NaiveDateTime>,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub fecha_modificacion: Option<NaiveDateTime>,
    #[serde(default)]
    pub estado: Option<bool>,
    /// Only present on `/api/cargo/con-personal`.
    #[serde(default)]
    pub cantidad_personal: Option<i64>,
}

impl Entity for Cargo {
    type Id = CargoId;

    fn id(&self) -> CargoId {
        self.cargo_id
    }

    fn label(&self) -> String {
        self.nombre_cargo.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoRequest {
    pub nombre_cargo: String,
    pub descripcion: String,
    pub sueldo: f64,
}

/// Create/update form for a cargo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CargoForm {
    pub nombre_cargo: String,
    pub descripcion: String,
    pub sueldo: Option<f64>,
}

impl Form for CargoForm {
    type Entity = Cargo;
    type Request = CargoRequest;

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.text("nombreCargo", &self.nombre_cargo).required().min_len(2).max_len(100);
        v.text("descripcion", &self.descripcion).max_len(500);
        v.positive("sueldo", self.sueldo);
        v.finish()
    }

    fn to_request(&self) -> CargoRequest {
        CargoRequest {
            nombre_cargo: self.nombre_cargo.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            sueldo: self.sueldo.unwrap_or_default(),
        }
    }

    fn from_entity(cargo: &Cargo) -> Self {
        Self {
            nombre_cargo: cargo.nombre_cargo.clone(),
            descripcion: cargo.descripcion.clone(),
            sueldo: Some(cargo.sueldo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::FieldError;

    fn valid_form() -> CargoForm {
        CargoForm {
            nombre_cargo: "ANALISTA".to_string(),
            descripcion: "Analista de sistemas".to_string(),
            sueldo: Some(3500.0),
        }
    }

    #[test]
    fn decodes_service_payload() {
        let body = r#"{
            "cargoId": 4,
            "nombreCargo": "TRABAJADOR LIDER",
            "descripcion": "Lidera cuadrillas",
            "sueldo": 4200.5,
            "fechaCreacion": "2024-01-10T08:00:00",
            "estado": true,
            "cantidadPersonal": 3
        }"#;
        let cargo: Cargo = serde_json::from_str(body).unwrap();
        assert_eq!(cargo.id(), CargoId::new(4));
        assert_eq!(cargo.cantidad_personal, Some(3));
        assert_eq!(cargo.estado, Some(true));
        assert!(cargo.fecha_modificacion.is_none());
    }

    #[test]
    fn submit_builds_trimmed_request() {
        let mut form = valid_form();
        form.nombre_cargo = "  ANALISTA ".to_string();
        let req = form.submit().unwrap();
        assert_eq!(req.nombre_cargo, "ANALISTA");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nombreCargo"], "ANALISTA");
        assert_eq!(json["sueldo"], 3500.0);
    }

    #[test]
    fn submit_rejects_missing_name_and_salary() {
        let form = CargoForm::default();
        let errors = form.submit().unwrap_err();
        assert!(errors.contains("nombreCargo", &FieldError::Required));
        assert!(errors.contains("sueldo", &FieldError::Required));
    }

    #[test]
    fn submit_rejects_non_positive_salary() {
        let mut form = valid_form();
        form.sueldo = Some(-10.0);
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get("sueldo"), &[FieldError::Positive]);
    }

    #[test]
    fn edit_populates_from_record() {
        let cargo = Cargo {
            cargo_id: CargoId::new(1),
            nombre_cargo: "JEFE DE SISTEMAS".to_string(),
            descripcion: String::new(),
            sueldo: 9000.0,
            fecha_creacion: None,
            fecha_modificacion: None,
            estado: Some(false),
            cantidad_personal: None,
        };
        let form = CargoForm::from_entity(&cargo);
        assert_eq!(form.sueldo, Some(9000.0));
        assert_eq!(cargo.estado, Some(false));
    }
}
