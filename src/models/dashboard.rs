use serde::Deserialize;

use crate::domain::dashboard::DashboardSummary;

/// Payload returned by `GET /dashboard/resumo`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardPayload {
    pub editais_ativos: u64,
    pub propostas_enviadas: u64,
    pub taxa_sucesso: f64,
    pub valor_total: f64,
    pub alertas_ativos: u64,
}

impl From<DashboardPayload> for DashboardSummary {
    fn from(payload: DashboardPayload) -> Self {
        DashboardSummary {
            active_notices: payload.editais_ativos,
            proposals_sent: payload.propostas_enviadas,
            success_rate: payload.taxa_sucesso,
            total_value: payload.valor_total,
            active_alerts: payload.alertas_ativos,
        }
    }
}
