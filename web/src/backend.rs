use status_report::{FormFields, Reply, ReportError, Result, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use crate::utils::describe;

fn transport_error(err: JsValue) -> ReportError {
    ReportError::Transport(describe(&err))
}

pub struct FetchReply {
    resp: Response,
}

impl Reply for FetchReply {
    fn status(&self) -> u16 {
        self.resp.status()
    }

    fn status_text(&self) -> String {
        self.resp.status_text()
    }

    fn ok(&self) -> bool {
        self.resp.ok()
    }

    async fn text(self) -> Result<String> {
        let text = JsFuture::from(self.resp.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;

        text.as_string()
            .ok_or_else(|| ReportError::Transport("response body is not text".into()))
    }
}

/// Posts forms through `window.fetch`.
pub struct FetchTransport;

impl FetchTransport {
    async fn send_request(endpoint: &str, fields: &FormFields) -> std::result::Result<Response, JsValue> {
        let body = FormData::new()?;
        for (name, value) in fields.iter() {
            body.append_with_str(name, value)?;
        }

        let request_config = RequestInit::new();
        request_config.set_method("POST");
        request_config.set_mode(RequestMode::SameOrigin);
        request_config.set_body(&body);

        let request = Request::new_with_str_and_init(endpoint, &request_config)?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;

        resp_value.dyn_into::<Response>()
    }
}

impl Transport for FetchTransport {
    type Reply = FetchReply;

    async fn post_form(&self, endpoint: &str, fields: &FormFields) -> Result<FetchReply> {
        Self::send_request(endpoint, fields)
            .await
            .map(|resp| FetchReply { resp })
            .map_err(transport_error)
    }
}
