//! Wire shape of the notice list endpoint and its normalization into
//! [`ProcurementNotice`].
//!
//! The backend returns two payload generations side by side: the portal's own
//! record nested under `json_raw` (camelCase PNCP names) and legacy flat
//! fields (`orgao`, `objeto`, `uf`, ...). Each display field is taken from the
//! first non-empty source in a fixed priority list, portal fields first.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::format::{PLACEHOLDER, format_brl, format_timestamp};
use crate::domain::notice::{LegalBasis, NoticeAttachment, NoticeItem, ProcurementNotice};
use crate::domain::types::{NoticeId, TypeConstraintError};
use crate::models::fields::{self, scalar_text};

/// Envelope returned by `GET /licitacoes/listar_banco`.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeListResponse {
    #[serde(default)]
    pub dados: Vec<RawNotice>,
}

/// One untyped notice payload.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RawNotice(pub Value);

type SourcePath = &'static [&'static str];

const ID: &[SourcePath] = &[&["id"]];
const ENTITY_NAME: &[SourcePath] = &[&["json_raw", "orgaoEntidade", "razaoSocial"], &["orgao"]];
const ENTITY_CNPJ: &[SourcePath] = &[&["json_raw", "orgaoEntidade", "cnpj"]];
const UNIT_NAME: &[SourcePath] = &[&["json_raw", "unidadeOrgao", "nomeUnidade"]];
const MUNICIPALITY: &[SourcePath] = &[
    &["json_raw", "unidadeOrgao", "municipioNome"],
    &["municipio"],
];
const REGION: &[SourcePath] = &[&["json_raw", "unidadeOrgao", "ufSigla"], &["uf"]];
const OBJECT: &[SourcePath] = &[&["json_raw", "objetoCompra"], &["objeto"]];
const PURCHASE_NUMBER: &[SourcePath] = &[&["json_raw", "numeroCompra"], &["numero"]];
const PROCESS_NUMBER: &[SourcePath] = &[&["json_raw", "processo"]];
const PNCP_ID: &[SourcePath] = &[&["json_raw", "numeroControlePNCP"], &["id_externo"]];
const MODALITY_CODE: &[SourcePath] = &[&["json_raw", "modalidadeId"], &["modalidade_id"]];
const MODALITY_NAME: &[SourcePath] = &[&["json_raw", "modalidadeNome"], &["modalidade"]];
const STATUS: &[SourcePath] = &[&["json_raw", "situacaoCompraNome"]];
const DISPUTE_MODE: &[SourcePath] = &[&["json_raw", "modoDisputaNome"]];
const PUBLISHED_DISPLAY: &[SourcePath] = &[
    &["json_raw", "dataPublicacaoPncp"],
    &["data_publicacao"],
];
const PUBLISHED_RAW: &[SourcePath] = &[&["data_publicacao"], &["json_raw", "dataPublicacaoPncp"]];
const OPENING: &[SourcePath] = &[&["json_raw", "dataAberturaProposta"], &["data_abertura"]];
const CLOSING: &[SourcePath] = &[
    &["json_raw", "dataEncerramentoProposta"],
    &["data_encerramento"],
];
const ESTIMATED_VALUE: &[SourcePath] = &[&["json_raw", "valorTotalEstimado"], &["valor_estimado"]];
const LINK: &[SourcePath] = &[&["json_raw", "linkSistemaOrigem"], &["url_externa"]];
const COMPLEMENTARY_INFO: &[SourcePath] = &[&["json_raw", "informacaoComplementar"]];
const LEGAL_BASIS_NAME: &[SourcePath] = &[&["json_raw", "amparoLegal", "nome"]];
const LEGAL_BASIS_DESCRIPTION: &[SourcePath] = &[&["json_raw", "amparoLegal", "descricao"]];
const SRP: &[SourcePath] = &[&["json_raw", "srp"], &["srp"]];
const ITEMS: &[SourcePath] = &[&["json_raw", "itens"], &["itens"]];
const ATTACHMENTS: &[SourcePath] = &[&["json_raw", "anexos"], &["anexos"]];

const ITEM_NUMBER: &[SourcePath] = &[&["numeroItem"], &["numero"]];
const ITEM_DESCRIPTION: &[SourcePath] = &[&["descricaoItem"], &["descricao"]];
const ITEM_QUANTITY: &[SourcePath] = &[&["quantidade"]];
const ITEM_UNIT: &[SourcePath] = &[&["unidadeMedida"], &["unidade"]];
const ATTACHMENT_NAME: &[SourcePath] = &[&["nomeArquivo"], &["nome"], &["titulo"]];
const ATTACHMENT_URL: &[SourcePath] = &[&["url"], &["uri"]];

fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(key))
}

fn first<'a>(root: &'a Value, sources: &[SourcePath]) -> Option<&'a Value> {
    sources
        .iter()
        .filter_map(|path| lookup(root, path))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
}

fn first_text(root: &Value, sources: &[SourcePath]) -> Option<String> {
    sources
        .iter()
        .filter_map(|path| lookup(root, path))
        .find_map(scalar_text)
}

fn text_or_placeholder(root: &Value, sources: &[SourcePath]) -> String {
    first_text(root, sources).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn parse_id(root: &Value) -> Result<NoticeId, TypeConstraintError> {
    first(root, ID).map_or(Err(TypeConstraintError::EmptyString), fields::parse_id)
}

fn format_value(root: &Value) -> String {
    match first(root, ESTIMATED_VALUE) {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(format_brl)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(value) => format_brl(value),
            Err(_) => s.trim().to_string(),
        },
        _ => PLACEHOLDER.to_string(),
    }
}

fn parse_items(root: &Value) -> Vec<NoticeItem> {
    let Some(Value::Array(items)) = first(root, ITEMS) else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| NoticeItem {
            number: first_text(item, ITEM_NUMBER).unwrap_or_else(|| (idx + 1).to_string()),
            description: first_text(item, ITEM_DESCRIPTION)
                .unwrap_or_else(|| "Descrição não informada".to_string()),
            quantity: first_text(item, ITEM_QUANTITY),
            unit: first_text(item, ITEM_UNIT),
        })
        .collect()
}

fn parse_attachments(root: &Value) -> Vec<NoticeAttachment> {
    let Some(Value::Array(attachments)) = first(root, ATTACHMENTS) else {
        return Vec::new();
    };
    attachments
        .iter()
        .enumerate()
        .map(|(idx, attachment)| NoticeAttachment {
            name: first_text(attachment, ATTACHMENT_NAME)
                .unwrap_or_else(|| format!("Anexo {}", idx + 1)),
            url: first_text(attachment, ATTACHMENT_URL),
        })
        .collect()
}

/// Normalizes one payload. Only a missing or non-positive identifier is an
/// error; every other absent field becomes the placeholder.
pub fn normalize(raw: RawNotice) -> Result<ProcurementNotice, TypeConstraintError> {
    let root = raw.0;
    let id = parse_id(&root)?;

    let published_raw = first_text(&root, PUBLISHED_RAW);
    let legal_basis = first_text(&root, LEGAL_BASIS_NAME).map(|name| LegalBasis {
        name,
        description: first_text(&root, LEGAL_BASIS_DESCRIPTION),
    });
    let srp = matches!(first(&root, SRP), Some(Value::Bool(true)));

    Ok(ProcurementNotice {
        id,
        entity_name: text_or_placeholder(&root, ENTITY_NAME),
        entity_cnpj: text_or_placeholder(&root, ENTITY_CNPJ),
        unit_name: text_or_placeholder(&root, UNIT_NAME),
        municipality: text_or_placeholder(&root, MUNICIPALITY),
        region: text_or_placeholder(&root, REGION),
        object: text_or_placeholder(&root, OBJECT),
        purchase_number: text_or_placeholder(&root, PURCHASE_NUMBER),
        process_number: text_or_placeholder(&root, PROCESS_NUMBER),
        pncp_id: text_or_placeholder(&root, PNCP_ID),
        modality_code: text_or_placeholder(&root, MODALITY_CODE),
        modality_name: text_or_placeholder(&root, MODALITY_NAME),
        status: text_or_placeholder(&root, STATUS),
        dispute_mode: text_or_placeholder(&root, DISPUTE_MODE),
        published_at: format_timestamp(first_text(&root, PUBLISHED_DISPLAY).as_deref()),
        opening_at: format_timestamp(first_text(&root, OPENING).as_deref()),
        closing_at: format_timestamp(first_text(&root, CLOSING).as_deref()),
        estimated_value: format_value(&root),
        srp,
        link: first_text(&root, LINK),
        complementary_info: first_text(&root, COMPLEMENTARY_INFO),
        legal_basis,
        items: parse_items(&root),
        attachments: parse_attachments(&root),
        published_raw,
        raw: root,
    })
}

impl TryFrom<RawNotice> for ProcurementNotice {
    type Error = TypeConstraintError;

    fn try_from(raw: RawNotice) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}
