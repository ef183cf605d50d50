//! Operator-facing texts shown by the console.
//!
//! The console is Portuguese-only; these strings are part of its external
//! behavior and are kept verbatim.

/// Form title when creating a record.
pub const TITLE_CREATE: &str = "Cadastrar CPF/CNPJ";
/// Form title when editing an existing record.
pub const TITLE_UPDATE: &str = "Atualizar CPF/CNPJ";

/// Number field left empty on submit.
pub const REQUIRED_FIELD: &str = "Este campo é obrigatório";
/// Number failed validation on submit.
pub const INVALID_NUMBER: &str = "CPF/CNPJ inválido.";

/// Backend reported a duplicate.
pub const ALREADY_REGISTERED: &str = "CPF/CNPJ já cadastrado.";
/// Backend unreachable.
pub const SERVICE_UNAVAILABLE: &str =
    "Serviço temporareamente indisponível, tente novamente mais tarde.";
/// Any other save failure.
pub const SAVE_FAILED: &str = "Falha ao tentar cadastrar o CPF/CNPJ.";

/// Listing could not be fetched.
pub const LIST_FAILED: &str = "Falha ao recuperar os registros.";
/// Delete failed.
pub const DELETE_FAILED: &str = "Falha ao tentar deletar registro.";
/// Generic success toast.
pub const OPERATION_SUCCEEDED: &str = "Operação realizada com sucesso.";

/// Delete confirmation dialog title.
pub const DELETE_CONFIRM_TITLE: &str = "Deseja continuar?";
/// Delete confirmation dialog body.
pub const DELETE_CONFIRM_DESCRIPTION: &str = "Clicando em confirmar, o CPF/CNPJ será excluído.";

/// Body the backend returns when the number is already registered.
pub const ALREADY_EXISTS_RESPONSE: &str = "National registration already exists error.";
