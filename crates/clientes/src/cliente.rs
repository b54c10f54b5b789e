use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use backoffice_core::{ClienteId, Entity, FieldErrors, Form, Validator};

/// Identity document kinds accepted by the client registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoDocumento {
    Dni,
    Ruc,
    Pasaporte,
}

impl TipoDocumento {
    pub const ALL: [TipoDocumento; 3] = [TipoDocumento::Dni, TipoDocumento::Ruc, TipoDocumento::Pasaporte];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipoDocumento::Dni => "DNI",
            TipoDocumento::Ruc => "RUC",
            TipoDocumento::Pasaporte => "PASAPORTE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoDocumento::Dni => "DNI",
            TipoDocumento::Ruc => "RUC",
            TipoDocumento::Pasaporte => "Pasaporte",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl core::fmt::Display for TipoDocumento {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client as returned by `/api/cliente`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub cliente_id: ClienteId,
    /// Kept as text: older rows may carry document kinds the form no longer offers.
    pub tipo_documento: String,
    pub numero_documento: String,
    pub razon_social: String,
    #[serde(default)]
    pub nombre_comercial: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub contacto_nombre: Option<String>,
    #[serde(default)]
    pub contacto_telefono: Option<String>,
    #[serde(default)]
    pub contacto_email: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub fecha_creacion: Option<NaiveDateTime>,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub fecha_modificacion: Option<NaiveDateTime>,
    #[serde(default)]
    pub estado: Option<bool>,
}

impl Cliente {
    /// Natural key: `TIPO-NUMERO`.
    pub fn documento(&self) -> String {
        format!("{}-{}", self.tipo_documento, self.numero_documento)
    }
}

impl Entity for Cliente {
    type Id = ClienteId;

    fn id(&self) -> ClienteId {
        self.cliente_id
    }

    fn label(&self) -> String {
        self.razon_social.clone()
    }
}

/// Create/update payload. Optional text fields travel as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    pub tipo_documento: TipoDocumento,
    pub numero_documento: String,
    pub razon_social: String,
    pub nombre_comercial: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub contacto_nombre: String,
    pub contacto_telefono: String,
    pub contacto_email: String,
    pub observaciones: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClienteForm {
    pub tipo_documento: String,
    pub numero_documento: String,
    pub razon_social: String,
    pub nombre_comercial: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub contacto_nombre: String,
    pub contacto_telefono: String,
    pub contacto_email: String,
    pub observaciones: String,
}

impl Form for ClienteForm {
    type Entity = Cliente;
    type Request = ClienteRequest;

    fn validate(&self) -> Result<(), FieldErrors> {
        let tipos: Vec<&str> = TipoDocumento::ALL.iter().map(TipoDocumento::as_str).collect();

        let mut v = Validator::new();
        v.text("tipoDocumento", &self.tipo_documento).required().one_of(&tipos);
        v.text("numeroDocumento", &self.numero_documento).required().min_len(8).max_len(20);
        v.text("razonSocial", &self.razon_social).required().min_len(2).max_len(200);
        v.text("nombreComercial", &self.nombre_comercial).max_len(200);
        v.text("telefono", &self.telefono).max_len(20);
        v.text("email", &self.email).email().max_len(150);
        v.text("direccion", &self.direccion).max_len(300);
        v.text("contactoNombre", &self.contacto_nombre).max_len(150);
        v.text("contactoTelefono", &self.contacto_telefono).max_len(20);
        v.text("contactoEmail", &self.contacto_email).email().max_len(150);
        v.text("observaciones", &self.observaciones).max_len(500);
        v.finish()
    }

    fn to_request(&self) -> ClienteRequest {
        ClienteRequest {
            tipo_documento: TipoDocumento::parse(&self.tipo_documento).unwrap_or(TipoDocumento::Dni),
            numero_documento: self.numero_documento.trim().to_string(),
            razon_social: self.razon_social.trim().to_string(),
            nombre_comercial: self.nombre_comercial.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            email: self.email.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
            contacto_nombre: self.contacto_nombre.trim().to_string(),
            contacto_telefono: self.contacto_telefono.trim().to_string(),
            contacto_email: self.contacto_email.trim().to_string(),
            observaciones: self.observaciones.trim().to_string(),
        }
    }

    fn from_entity(c: &Cliente) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            tipo_documento: c.tipo_documento.clone(),
            numero_documento: c.numero_documento.clone(),
            razon_social: c.razon_social.clone(),
            nombre_comercial: text(&c.nombre_comercial),
            telefono: text(&c.telefono),
            email: text(&c.email),
            direccion: text(&c.direccion),
            contacto_nombre: text(&c.contacto_nombre),
            contacto_telefono: text(&c.contacto_telefono),
            contacto_email: text(&c.contacto_email),
            observaciones: text(&c.observaciones),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::FieldError;

    fn valid_form() -> ClienteForm {
        ClienteForm {
            tipo_documento: "RUC".to_string(),
            numero_documento: "20123456789".to_string(),
            razon_social: "Servicios Andinos SAC".to_string(),
            email: "ventas@andinos.pe".to_string(),
            ..ClienteForm::default()
        }
    }

    #[test]
    fn submit_sends_blank_optionals_as_empty_strings() {
        let req = valid_form().submit().unwrap();
        assert_eq!(req.tipo_documento, TipoDocumento::Ruc);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["tipoDocumento"], "RUC");
        assert_eq!(json["telefono"], "");
        assert_eq!(json["contactoEmail"], "");
    }

    #[test]
    fn rejects_unknown_document_type() {
        let mut form = valid_form();
        form.tipo_documento = "CE".to_string();
        let errors = form.submit().unwrap_err();
        assert!(matches!(errors.get("tipoDocumento"), [FieldError::OneOf { .. }]));
    }

    #[test]
    fn validates_lengths_and_emails() {
        let mut form = valid_form();
        form.numero_documento = "1234".to_string();
        form.contacto_email = "contacto@".to_string();
        form.observaciones = "x".repeat(501);
        let errors = form.submit().unwrap_err();
        assert!(errors.contains("numeroDocumento", &FieldError::MinLength { min: 8 }));
        assert!(errors.contains("contactoEmail", &FieldError::Email));
        assert!(errors.contains("observaciones", &FieldError::MaxLength { max: 500 }));
    }

    #[test]
    fn document_type_parsing_is_case_insensitive() {
        assert_eq!(TipoDocumento::parse("pasaporte"), Some(TipoDocumento::Pasaporte));
        assert_eq!(TipoDocumento::Pasaporte.label(), "Pasaporte");
        assert_eq!(TipoDocumento::parse("carnet"), None);
    }

    #[test]
    fn decodes_and_round_trips_through_form() {
        let body = r#"{
            "clienteId": 9,
            "tipoDocumento": "DNI",
            "numeroDocumento": "44556677",
            "razonSocial": "Maria Quispe",
            "telefono": "999888777",
            "estado": true
        }"#;
        let cliente: Cliente = serde_json::from_str(body).unwrap();
        assert_eq!(cliente.documento(), "DNI-44556677");
        let form = ClienteForm::from_entity(&cliente);
        assert_eq!(form.telefono, "999888777");
        assert_eq!(form.email, "");
        assert!(form.validate().is_ok());
    }
}
