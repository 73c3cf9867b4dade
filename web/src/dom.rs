use log::warn;
use status_report::config::ElementIds;
use status_report::{DownloadLink, PageConfig, ReportError, Result, StatusLevel, Table, View};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlFormElement, console};

use crate::utils::describe;

const SUBMIT_CONTROLS: &str = "button[type=submit], button:not([type]), input[type=submit]";

fn render_error(err: JsValue) -> ReportError {
    ReportError::Render(describe(&err))
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<T>().ok())
        .ok_or_else(|| ReportError::MissingElement(id.to_owned()))
}

/// The report page, with every region resolved once up front.
pub struct DomView {
    document: Document,
    form: HtmlFormElement,
    table: Element,
    spinner: HtmlElement,
    modal: HtmlElement,
    modal_content: Element,
    close: Element,
    submit_controls: Vec<Element>,
    spinner_display: String,
    modal_display: String,
}

impl DomView {
    pub fn resolve(document: Document, config: &PageConfig) -> Result<DomView> {
        let ElementIds {
            form,
            table,
            spinner,
            modal,
            modal_content,
            close,
            ..
        } = &config.elements;

        let form: HtmlFormElement = lookup(&document, form)?;
        let submit_controls = Self::submit_controls(&form).map_err(render_error)?;

        Ok(DomView {
            table: lookup(&document, table)?,
            spinner: lookup(&document, spinner)?,
            modal: lookup(&document, modal)?,
            modal_content: lookup(&document, modal_content)?,
            close: lookup(&document, close)?,
            form,
            submit_controls,
            spinner_display: config.spinner_display.clone(),
            modal_display: config.modal_display.clone(),
            document,
        })
    }

    fn submit_controls(form: &HtmlFormElement) -> std::result::Result<Vec<Element>, JsValue> {
        let nodes = form.query_selector_all(SUBMIT_CONTROLS)?;
        Ok((0..nodes.length())
            .filter_map(|idx| nodes.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn close_control(&self) -> &Element {
        &self.close
    }

    fn set_display(element: &HtmlElement, display: &str) {
        if let Err(err) = element.style().set_property("display", display) {
            warn!("Cannot set display on #{}: {}", element.id(), describe(&err));
        }
    }

    fn cell(&self, tag: &str, text: &str) -> std::result::Result<Element, JsValue> {
        let cell = self.document.create_element(tag)?;
        cell.set_text_content(Some(text));
        Ok(cell)
    }

    fn build_table(&self, table: &Table) -> std::result::Result<(), JsValue> {
        self.table.set_text_content(None);

        let header_row = self.document.create_element("tr")?;
        for column in table.columns() {
            let th = self.cell("th", column)?;
            header_row.append_child(&th)?;
        }
        self.table.append_child(&header_row)?;

        let status_column = table.status_column();
        for row in table.rows() {
            let tr = self.document.create_element("tr")?;
            for (column_num, text) in row.iter().enumerate() {
                let td = self.cell("td", text)?;
                if status_column == Some(column_num) {
                    if let Some(level) = StatusLevel::from_cell(text) {
                        td.class_list().add_1(level.css_class())?;
                    }
                }
                tr.append_child(&td)?;
            }
            self.table.append_child(&tr)?;
        }

        Ok(())
    }

    fn build_link(&self, link: &DownloadLink) -> std::result::Result<(), JsValue> {
        if let Some(existing) = self.document.get_element_by_id(&link.id) {
            existing.remove();
        }

        let anchor: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        anchor.set_id(&link.id);
        anchor.set_href(&link.href);
        anchor.set_download(&link.file_name);
        anchor.set_text_content(Some(&link.label));
        anchor.style().set_property("display", "block")?;

        self.modal_content.append_child(&anchor)?;
        Ok(())
    }
}

impl View for DomView {
    fn set_loading(&self, shown: bool) {
        let display = if shown { self.spinner_display.as_str() } else { "none" };
        Self::set_display(&self.spinner, display);
    }

    fn set_modal(&self, shown: bool) {
        let display = if shown { self.modal_display.as_str() } else { "none" };
        Self::set_display(&self.modal, display);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        for control in &self.submit_controls {
            if let Err(err) = control.toggle_attribute_with_force("disabled", !enabled) {
                warn!("Cannot toggle submit control: {}", describe(&err));
            }
        }
    }

    fn render_table(&self, table: &Table) -> Result<()> {
        self.build_table(table).map_err(render_error)
    }

    fn replace_download_link(&self, link: &DownloadLink) -> Result<()> {
        self.build_link(link).map_err(render_error)
    }

    fn report_failure(&self, error: &ReportError) {
        console::error_2(
            &"There was a problem with the fetch operation:".into(),
            &error.to_string().into(),
        );
    }
}
