mod backend;
mod dom;
mod utils;

use std::rc::Rc;

use js_sys::Array;
use log::{debug, error, info};
use status_report::{FormFields, PageConfig, ReportError, SubmissionHandler};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FormData, HtmlFormElement};

use backend::FetchTransport;
use dom::DomView;
use utils::{describe, init_logger, set_panic_hook};

type PageHandler = SubmissionHandler<DomView, FetchTransport>;

/// Entry point for the report page.
///
/// ```js
/// new StatusReport().attach();
/// ```
#[wasm_bindgen]
pub struct StatusReport {
    config: PageConfig,
}

#[wasm_bindgen]
impl StatusReport {
    #[wasm_bindgen(constructor)]
    pub fn new() -> StatusReport {
        StatusReport::from_config(PageConfig::default())
    }

    /// Builds a client from a TOML page config, see `PageConfig`.
    pub fn with_config(config_text: &str) -> Result<StatusReport, StatusError> {
        Ok(StatusReport::from_config(PageConfig::from_toml(config_text)?))
    }

    /// Hooks the form's submit and the modal's close control. The listeners
    /// live for the rest of the page.
    pub fn attach(self) -> Result<(), StatusError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| StatusError::new(StatusErrorKind::MissingElement, "no document".into()))?;

        let view = DomView::resolve(document, &self.config)?;
        let form = view.form().clone();
        let close = view.close_control().clone();
        let handler = Rc::new(SubmissionHandler::new(view, FetchTransport, self.config));

        let on_submit = {
            let handler = handler.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                submit(handler.clone(), &form);
            })
        };
        handler
            .view()
            .form()
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(StatusError::from_js)?;

        let on_close = {
            let handler = handler.clone();
            Closure::<dyn FnMut(Event)>::new(move |_: Event| handler.dismiss())
        };
        close
            .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())
            .map_err(StatusError::from_js)?;

        on_submit.forget();
        on_close.forget();

        info!("Status report form attached");
        Ok(())
    }
}

impl StatusReport {
    fn from_config(config: PageConfig) -> StatusReport {
        set_panic_hook();
        init_logger(config.log_level);
        StatusReport { config }
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        StatusReport::new()
    }
}

fn submit(handler: Rc<PageHandler>, form: &HtmlFormElement) {
    let fields = match form_fields(form) {
        Ok(fields) => fields,
        Err(err) => {
            error!("Cannot read form fields: {}", describe(&err));
            return;
        }
    };

    spawn_local(async move {
        // Failures were already reported through the page's diagnostic channel
        if let Err(err) = handler.submit(fields).await {
            debug!("Submission ended with: {}", err);
        }
    });
}

/// Text fields of `form` in document order. File inputs are skipped.
fn form_fields(form: &HtmlFormElement) -> Result<FormFields, JsValue> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?
        .ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

    let mut fields = FormFields::new();
    for entry in entries {
        let entry: Array = entry?.dyn_into()?;
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            fields.push(name, value);
        }
    }

    Ok(fields)
}

#[wasm_bindgen]
pub struct StatusError {
    kind: StatusErrorKind,
    msg: String,
}

#[wasm_bindgen]
impl StatusError {
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> StatusErrorKind {
        self.kind
    }

    #[wasm_bindgen(getter)]
    pub fn msg(&self) -> String {
        self.msg.clone()
    }
}

impl StatusError {
    fn new(kind: StatusErrorKind, msg: String) -> StatusError {
        StatusError { kind, msg }
    }

    fn from_js(value: JsValue) -> StatusError {
        StatusError::new(StatusErrorKind::UnexpectedFailure, describe(&value))
    }
}

impl From<ReportError> for StatusError {
    fn from(error: ReportError) -> StatusError {
        let kind = match &error {
            ReportError::Transport(_) | ReportError::Status { .. } => StatusErrorKind::RequestError,
            ReportError::Parse(_) => StatusErrorKind::EncodingError,
            ReportError::Render(_) => StatusErrorKind::UnexpectedFailure,
            ReportError::Busy => StatusErrorKind::Busy,
            ReportError::Config(_) => StatusErrorKind::ConfigError,
            ReportError::MissingElement(_) => StatusErrorKind::MissingElement,
        };

        StatusError {
            kind,
            msg: error.to_string(),
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusErrorKind {
    RequestError,
    EncodingError,
    Busy,
    ConfigError,
    MissingElement,
    UnexpectedFailure,
}
