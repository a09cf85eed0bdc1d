use super::*;

impl ApiClient {
    pub fn fetch_packs(&self) -> ApiResult<Vec<PackCatalogEntry>> {
        let catalog: PackCatalog = self.get_json("list packs", "/api/packs")?;
        Ok(catalog.packs)
    }

    pub fn fetch_pack(&self, domain: &str, pack_id: &str, version: &str) -> ApiResult<PackDetail> {
        self.get_json(
            "fetch pack",
            &format!("/api/packs/{}/{}/{}", domain, pack_id, version),
        )
    }

    /// Industry/segment/use-case taxonomy, passed through as raw JSON.
    pub fn list_industries(&self) -> ApiResult<Vec<serde_json::Value>> {
        let v: serde_json::Value = self.get_json("list industries", "/api/taxonomy/industries")?;
        Ok(v.get("industries")
            .and_then(|x| x.as_array())
            .cloned()
            .unwrap_or_default())
    }
}
