use std::thread;

use crate::model::{PackDetail, PackVersionKey};
use crate::remote::{ApiResult, ConsoleApi};

use super::request::{Request, Response};

/// Performs one request. Parallel parts run on scoped threads and all must succeed.
pub fn execute<A: ConsoleApi + ?Sized>(api: &A, project_id: &str, req: Request) -> Response {
    tracing::debug!(project_id, request = req.label(), "execute");
    match req {
        Request::Refresh { ticket, settle } => {
            let (project, checklist) = thread::scope(|s| {
                let checklist = s.spawn(|| api.fetch_checklist(project_id));
                let project = api.fetch_project(project_id);
                (project, joined(checklist.join()))
            });
            let result = match (project, checklist) {
                (Ok(p), Ok(c)) => Ok((p, c)),
                (Err(e), _) => Err(e.to_string()),
                (_, Err(e)) => Err(e),
            };
            Response::Refreshed {
                ticket,
                settle,
                result,
            }
        }
        Request::LoadCatalog => Response::CatalogLoaded(api.fetch_packs().map_err(|e| e.to_string())),
        Request::FetchPackDetails { pass, keys } => {
            let result = fetch_details(api, &keys);
            Response::PackDetails { pass, keys, result }
        }
        Request::PatchProject(patch) => Response::ProjectPatched(
            api.patch_project(project_id, &patch)
                .map_err(|e| e.to_string()),
        ),
        Request::DeleteProject => {
            Response::ProjectDeleted(api.delete_project(project_id).map_err(|e| e.to_string()))
        }
        Request::PatchItem { item_id, patch } => {
            let result = api
                .patch_checklist_item(project_id, &item_id, &patch)
                .map_err(|e| e.to_string());
            Response::ItemPatched { item_id, result }
        }
        Request::UploadEvidence { item_id, path } => {
            let result = api
                .upload_evidence(project_id, &item_id, &path)
                .map_err(|e| e.to_string());
            Response::EvidenceUploaded { item_id, result }
        }
    }
}

fn fetch_details<A: ConsoleApi + ?Sized>(
    api: &A,
    keys: &[PackVersionKey],
) -> Result<Vec<PackDetail>, String> {
    thread::scope(|s| {
        let handles: Vec<_> = keys
            .iter()
            .map(|k| s.spawn(move || api.fetch_pack(&k.domain, &k.pack_id, &k.version)))
            .collect();
        handles
            .into_iter()
            .map(|h| joined(h.join()))
            .collect::<Result<Vec<_>, String>>()
    })
}

fn joined<T>(res: thread::Result<ApiResult<T>>) -> Result<T, String> {
    match res {
        Ok(r) => r.map_err(|e| e.to_string()),
        Err(_) => Err("request worker panicked".to_string()),
    }
}
