use serde::{Deserialize, Serialize};
use treasury_core::metrics::{MarketShares, PartnerSeries, PartnerTotal};
use treasury_core::PartnerId;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarketShareResponse {
    pub shares: MarketShares,
    pub dominant_partner: PartnerId,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PartnerOverview {
    pub totals: Vec<PartnerTotal>,
    pub series: Vec<PartnerSeries>,
}
