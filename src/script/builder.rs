// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fluent overseer script builder
//!
//! Each operation appends one self-contained statement operating on the
//! remote `page` object and ends with a newline. Statements execute remotely
//! in emission order. The builder is write-only: there is no AST, only an
//! accumulating text buffer.
//!
//! Caller-supplied strings (selectors, URLs, typed text, cookie fields,
//! XPath expressions) are inserted into the emitted statements verbatim,
//! without escaping. Callers must keep quote, backslash and newline
//! characters out of those inputs; [`ScriptBuilder::raw`] is the escape
//! hatch for anything the typed operations cannot express.

use std::collections::BTreeMap;

use crate::presets::stealth::STEALTH_JS;
use crate::presets::useragents::Profile;
use crate::types::Viewport;

/// Builds a PhantomJsCloud overseer script step by step
///
/// Call [`build`](ScriptBuilder::build) to get the final script text, or
/// hand the builder to
/// [`Client::fetch_with_automation`](crate::Client::fetch_with_automation)
/// or [`PageRequestBuilder::script_builder`](crate::PageRequestBuilder::script_builder).
///
/// ```
/// use phantomjscloud::ScriptBuilder;
///
/// let script = ScriptBuilder::new()
///     .goto("https://example.com")
///     .wait_for_selector(".main")
///     .click("button#more")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    script: String,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Navigation ───────────────────────────────────────────────────────

    /// Navigate to a URL and wait for the default load event.
    pub fn goto(mut self, url: &str) -> Self {
        self.script.push_str("await page.goto('");
        self.script.push_str(url);
        self.script.push_str("');\n");
        self
    }

    /// Navigate to a URL and wait for a specific load event.
    /// Common values: `load`, `domcontentloaded`, `networkidle0`,
    /// `networkidle2`. Prefer this over [`goto`](Self::goto) plus
    /// [`wait_for_navigation_event`](Self::wait_for_navigation_event) for
    /// SPAs that fire no traditional load events.
    pub fn goto_with_wait_until(mut self, url: &str, wait_until: &str) -> Self {
        self.script.push_str("await page.goto('");
        self.script.push_str(url);
        self.script.push_str("', {waitUntil: '");
        self.script.push_str(wait_until);
        self.script.push_str("'});\n");
        self
    }

    /// Refresh the current page.
    pub fn reload(mut self) -> Self {
        self.script.push_str("await page.reload();\n");
        self
    }

    /// Navigate to the previous page in history.
    pub fn go_back(mut self) -> Self {
        self.script.push_str("await page.goBack();\n");
        self
    }

    /// Navigate to the next page in history.
    pub fn go_forward(mut self) -> Self {
        self.script.push_str("await page.goForward();\n");
        self
    }

    /// Wait for a navigation to complete (default: load).
    pub fn wait_for_navigation(mut self) -> Self {
        self.script.push_str("await page.waitForNavigation();\n");
        self
    }

    /// Wait for a specific navigation event (`load`, `domcontentloaded`,
    /// `networkidle0`, `networkidle2`).
    pub fn wait_for_navigation_event(mut self, event: &str) -> Self {
        self.script.push_str("await page.waitForNavigation({waitUntil: '");
        self.script.push_str(event);
        self.script.push_str("'});\n");
        self
    }

    /// Wait for network inactivity. `(0, 500)` maps to the canonical
    /// `networkidle0` event and `(2, 500)` to `networkidle2`; any other
    /// combination is silently coerced to `networkidle0` because the remote
    /// runtime only realizes the two standard forms.
    pub fn wait_for_network_idle(self, idle_connections: u32, idle_ms: u32) -> Self {
        if idle_connections == 2 && idle_ms == 500 {
            return self.wait_for_navigation_event("networkidle2");
        }
        self.wait_for_navigation_event("networkidle0")
    }

    /// Wait until the page URL contains the fragment.
    pub fn wait_for_url(mut self, url_fragment: &str) -> Self {
        self.script.push_str(
            "await page.waitForFunction((url) => window.location.href.includes(url), {}, '",
        );
        self.script.push_str(url_fragment);
        self.script.push_str("');\n");
        self
    }

    // ── Waits ────────────────────────────────────────────────────────────

    /// Wait for an element matching the selector to appear in the DOM.
    pub fn wait_for_selector(mut self, selector: &str) -> Self {
        self.script.push_str("await page.waitForSelector('");
        self.script.push_str(selector);
        self.script.push_str("');\n");
        self
    }

    /// Wait for an XPath expression to match in the DOM.
    pub fn wait_for_xpath(mut self, xpath: &str) -> Self {
        self.script.push_str("await page.waitForXPath(\"");
        self.script.push_str(xpath);
        self.script.push_str("\");\n");
        self
    }

    /// Pause until the provided JavaScript expression returns truthy.
    pub fn wait_for_function(mut self, js_func: &str) -> Self {
        self.script.push_str("await page.waitForFunction(");
        self.script.push_str(js_func);
        self.script.push_str(");\n");
        self
    }

    /// Pause script execution for a number of milliseconds.
    pub fn wait_for_delay(mut self, ms: u32) -> Self {
        self.script.push_str("await page.waitForDelay(");
        self.script.push_str(&ms.to_string());
        self.script.push_str(");\n");
        self
    }

    // ── Input ────────────────────────────────────────────────────────────

    /// Click the element matching the selector.
    pub fn click(mut self, selector: &str) -> Self {
        self.script.push_str("await page.click('");
        self.script.push_str(selector);
        self.script.push_str("');\n");
        self
    }

    /// Click an element and simultaneously wait for the resulting
    /// navigation. Emitted as a single fused `Promise.all` statement so the
    /// wait is attached before the click fires; two sequential statements
    /// would race when navigation completes first.
    pub fn click_and_wait_for_navigation(mut self, selector: &str) -> Self {
        self.script.push_str("await Promise.all([\n");
        self.script.push_str("  page.waitForNavigation(),\n");
        self.script.push_str("  page.click('");
        self.script.push_str(selector);
        self.script.push_str("')\n");
        self.script.push_str("]);\n");
        self
    }

    /// Type text into the element matching the selector. A positive
    /// `delay_ms` inserts a per-keystroke delay; zero omits the options
    /// object entirely.
    pub fn type_text(mut self, selector: &str, text: &str, delay_ms: u32) -> Self {
        self.script.push_str("await page.type('");
        self.script.push_str(selector);
        self.script.push_str("', '");
        self.script.push_str(text);
        if delay_ms > 0 {
            self.script.push_str("',{delay:");
            self.script.push_str(&delay_ms.to_string());
            self.script.push_str("});\n");
        } else {
            self.script.push_str("');\n");
        }
        self
    }

    /// Press a key (e.g. `Backspace`, `Enter`) `times` times. A count of
    /// zero or one emits the plain single-press form.
    pub fn keyboard_press(mut self, key: &str, times: u32) -> Self {
        if times <= 1 {
            self.script.push_str("await page.keyboard.press('");
            self.script.push_str(key);
            self.script.push_str("');\n");
        } else {
            self.script.push_str("await page.keyboard.press('");
            self.script.push_str(key);
            self.script.push_str("', {times: ");
            self.script.push_str(&times.to_string());
            self.script.push_str("});\n");
        }
        self
    }

    /// Rest the mouse over the element matching the selector.
    pub fn hover(mut self, selector: &str) -> Self {
        self.script.push_str("await page.hover('");
        self.script.push_str(selector);
        self.script.push_str("');\n");
        self
    }

    /// Focus the element matching the selector.
    pub fn focus(mut self, selector: &str) -> Self {
        self.script.push_str("await page.focus('");
        self.script.push_str(selector);
        self.script.push_str("');\n");
        self
    }

    /// Select options in a dropdown.
    pub fn select<I, S>(mut self, selector: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| format!("'{}'", v.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        self.script.push_str("await page.select('");
        self.script.push_str(selector);
        self.script.push_str("', ");
        self.script.push_str(&joined);
        self.script.push_str(");\n");
        self
    }

    /// Drag an element from one selector to another.
    pub fn drag_and_drop(mut self, source_selector: &str, target_selector: &str) -> Self {
        self.script.push_str("await page.dragAndDrop('");
        self.script.push_str(source_selector);
        self.script.push_str("', '");
        self.script.push_str(target_selector);
        self.script.push_str("');\n");
        self
    }

    /// Move the mouse cursor to an absolute coordinate.
    pub fn mouse_move(mut self, x: i32, y: i32) -> Self {
        self.script.push_str("await page.mouse.move(");
        self.script.push_str(&x.to_string());
        self.script.push_str(", ");
        self.script.push_str(&y.to_string());
        self.script.push_str(");\n");
        self
    }

    /// Click at an absolute coordinate rather than a DOM target.
    pub fn mouse_click_position(mut self, x: i32, y: i32) -> Self {
        self.script.push_str("await page.mouse.click(");
        self.script.push_str(&x.to_string());
        self.script.push_str(", ");
        self.script.push_str(&y.to_string());
        self.script.push_str(");\n");
        self
    }

    // ── DOM / JS injection ───────────────────────────────────────────────

    /// Inject an external script into the page.
    pub fn add_script_tag(mut self, url: &str) -> Self {
        self.script.push_str("await page.addScriptTag({url: '");
        self.script.push_str(url);
        self.script.push_str("'});\n");
        self
    }

    /// Inject custom CSS into the page.
    pub fn add_style_tag(mut self, css_content: &str) -> Self {
        self.script.push_str("await page.addStyleTag({content: `");
        self.script.push_str(css_content);
        self.script.push_str("`});\n");
        self
    }

    /// Append an evaluation block. `function_body` must be a valid JS
    /// function or expression.
    pub fn evaluate(mut self, function_body: &str) -> Self {
        self.script.push_str("await page.evaluate(");
        self.script.push_str(function_body);
        self.script.push_str(");\n");
        self
    }

    /// Append a raw JavaScript block followed by a newline, with no framing
    /// or escaping. The designated escape hatch.
    pub fn raw(mut self, code: &str) -> Self {
        self.script.push_str(code);
        self.script.push('\n');
        self
    }

    /// Clear a text field by evaluating JavaScript against it.
    pub fn clear_input(mut self, selector: &str) -> Self {
        self.script.push_str(
            "await page.evaluate((sel) => { document.querySelector(sel).value = ''; }, '",
        );
        self.script.push_str(selector);
        self.script.push_str("');\n");
        self
    }

    /// Scroll the page by a pixel offset.
    pub fn scroll_by(mut self, x: i32, y: i32) -> Self {
        self.script
            .push_str("await page.evaluate((x, y) => { window.scrollBy(x, y); }, ");
        self.script.push_str(&x.to_string());
        self.script.push_str(", ");
        self.script.push_str(&y.to_string());
        self.script.push_str(");\n");
        self
    }

    /// Scroll to the absolute bottom of the document. Useful for pages with
    /// infinite-scroll loaders.
    pub fn scroll_to_bottom(mut self) -> Self {
        self.script
            .push_str("await page.evaluate(() => window.scrollTo(0, document.body.scrollHeight));\n");
        self
    }

    // ── Environment ──────────────────────────────────────────────────────

    /// Override the viewport dimensions mid-script. For device emulation
    /// flags use [`apply_viewport`](Self::apply_viewport).
    pub fn set_viewport(mut self, width: u32, height: u32) -> Self {
        self.script.push_str("await page.setViewport({width: ");
        self.script.push_str(&width.to_string());
        self.script.push_str(", height: ");
        self.script.push_str(&height.to_string());
        self.script.push_str("});\n");
        self
    }

    /// Apply a fully configured [`Viewport`] including device scale factor
    /// and mobile/touch/landscape flags. Use a named preset from
    /// [`presets::viewport`](crate::presets::viewport):
    ///
    /// ```
    /// use phantomjscloud::{presets::viewport, ScriptBuilder};
    ///
    /// let script = ScriptBuilder::new()
    ///     .apply_viewport(viewport::MOBILE_PORTRAIT.viewport)
    ///     .build();
    /// ```
    pub fn apply_viewport(mut self, v: Viewport) -> Self {
        self.script.push_str(&format!(
            "await page.setViewport({{width:{},height:{},deviceScaleFactor:{},isMobile:{},hasTouch:{},isLandscape:{}}});\n",
            v.width, v.height, v.device_scale_factor, v.is_mobile, v.has_touch, v.is_landscape,
        ));
        self
    }

    /// Override the browser user agent mid-script.
    pub fn set_user_agent(mut self, user_agent: &str) -> Self {
        self.script.push_str("await page.setUserAgent('");
        self.script.push_str(user_agent);
        self.script.push_str("');\n");
        self
    }

    /// Set the user agent string and its matching header bundle (Accept,
    /// Accept-Language, Sec-CH-UA, Sec-Fetch-* etc.) in a single call. The
    /// recommended way to spoof a browser fingerprint, since mismatched
    /// UA/header combinations are a common bot signal.
    ///
    /// ```
    /// use phantomjscloud::{presets::useragents, ScriptBuilder};
    ///
    /// let script = ScriptBuilder::new()
    ///     .use_profile(&useragents::chrome_windows_profile())
    ///     .build();
    /// ```
    pub fn use_profile(mut self, p: &Profile) -> Self {
        self.script
            .push_str(&format!("await page.setUserAgent({:?});\n", p.user_agent));
        if !p.headers.is_empty() {
            if let Ok(raw) = serde_json::to_string(&p.headers) {
                self.script.push_str("await page.setExtraHTTPHeaders(");
                self.script.push_str(&raw);
                self.script.push_str(");\n");
            }
        }
        self
    }

    /// Inject global request headers mid-script. The map is emitted as an
    /// inline object literal in sorted key order.
    pub fn set_extra_http_headers(mut self, headers: &BTreeMap<String, String>) -> Self {
        self.script.push_str("await page.setExtraHTTPHeaders({");
        let mut first = true;
        for (k, v) in headers {
            if !first {
                self.script.push_str(", ");
            }
            self.script.push('\'');
            self.script.push_str(k);
            self.script.push_str("': '");
            self.script.push_str(v);
            self.script.push('\'');
            first = false;
        }
        self.script.push_str("});\n");
        self
    }

    /// Add a cookie to the browser context.
    pub fn set_cookie(mut self, name: &str, value: &str, domain: &str) -> Self {
        self.script.push_str("await page.setCookie({name: '");
        self.script.push_str(name);
        self.script.push_str("', value: '");
        self.script.push_str(value);
        self.script.push_str("', domain: '");
        self.script.push_str(domain);
        self.script.push_str("'});\n");
        self
    }

    /// Remove a cookie from the browser context.
    pub fn delete_cookie(mut self, name: &str, url: &str) -> Self {
        self.script.push_str("await page.deleteCookie({name: '");
        self.script.push_str(name);
        self.script.push_str("', url: '");
        self.script.push_str(url);
        self.script.push_str("'});\n");
        self
    }

    /// Inject the embedded suite of browser fingerprinting evasions. Spoofs
    /// `navigator`, `chrome`, WebGL, plugin and codec APIs that bot-detection
    /// scripts probe. Call early, ideally before [`goto`](Self::goto), so
    /// the evasions are registered before any page content loads.
    pub fn apply_stealth(mut self) -> Self {
        self.script.push_str("await page.evaluateOnNewDocument(");
        self.script.push_str(STEALTH_JS);
        self.script.push_str(");\n");
        self
    }

    // ── Rendering / lifecycle ────────────────────────────────────────────

    /// Capture the HTML content of the page immediately.
    pub fn render_content(mut self) -> Self {
        self.script.push_str("page.render.content();\n");
        self
    }

    /// Capture a screenshot immediately. `wait` awaits the render.
    pub fn render_screenshot(mut self, wait: bool) -> Self {
        if wait {
            self.script.push_str("await page.render.screenshot();\n");
        } else {
            self.script.push_str("page.render.screenshot();\n");
        }
        self
    }

    /// Tell the renderer the script manages completion manually, disabling
    /// automatic termination. Pair with [`done`](Self::done).
    pub fn manual_wait(mut self) -> Self {
        self.script.push_str("page.manualWait();\n");
        self
    }

    /// Signal manual termination to the renderer.
    pub fn done(mut self) -> Self {
        self.script.push_str("page.done();\n");
        self
    }

    /// Return the finalized script. Idempotent; the builder stays usable.
    pub fn build(&self) -> String {
        self.script.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw() {
        let script = ScriptBuilder::new().raw("console.log('test');").build();
        assert_eq!(script, "console.log('test');\n");
    }

    #[test]
    fn test_statement_ordering() {
        let script = ScriptBuilder::new()
            .goto("https://example.com")
            .wait_for_selector(".main")
            .raw("console.log('done');")
            .build();
        assert_eq!(
            script,
            "await page.goto('https://example.com');\n\
             await page.waitForSelector('.main');\n\
             console.log('done');\n"
        );
    }

    #[test]
    fn test_build_is_idempotent_and_nondestructive() {
        let b = ScriptBuilder::new().goto("https://example.com");
        assert_eq!(b.build(), b.build());
        let b = b.reload();
        assert!(b.build().ends_with("await page.reload();\n"));
    }

    #[test]
    fn test_click_and_wait_for_navigation_is_fused() {
        let script = ScriptBuilder::new()
            .click_and_wait_for_navigation("button#submit")
            .build();
        assert_eq!(
            script,
            "await Promise.all([\n  page.waitForNavigation(),\n  page.click('button#submit')\n]);\n"
        );
    }

    #[test]
    fn test_type_text_with_delay() {
        let script = ScriptBuilder::new()
            .type_text("input#name", "test user", 100)
            .build();
        assert_eq!(script, "await page.type('input#name', 'test user',{delay:100});\n");
    }

    #[test]
    fn test_type_text_zero_delay_omits_options() {
        let script = ScriptBuilder::new()
            .type_text("input#name", "test user", 0)
            .build();
        assert_eq!(script, "await page.type('input#name', 'test user');\n");
    }

    #[test]
    fn test_keyboard_press_single_and_repeated() {
        let single = ScriptBuilder::new().keyboard_press("Enter", 1).build();
        assert_eq!(single, "await page.keyboard.press('Enter');\n");

        let repeated = ScriptBuilder::new().keyboard_press("Backspace", 5).build();
        assert_eq!(
            repeated,
            "await page.keyboard.press('Backspace', {times: 5});\n"
        );
    }

    #[test]
    fn test_wait_for_network_idle_mapping() {
        let idle0 = ScriptBuilder::new().wait_for_network_idle(0, 500).build();
        assert_eq!(
            idle0,
            "await page.waitForNavigation({waitUntil: 'networkidle0'});\n"
        );

        let idle2 = ScriptBuilder::new().wait_for_network_idle(2, 500).build();
        assert_eq!(
            idle2,
            "await page.waitForNavigation({waitUntil: 'networkidle2'});\n"
        );

        // Non-canonical arguments coerce to the conservative idle-0 wait.
        let odd = ScriptBuilder::new().wait_for_network_idle(7, 250).build();
        assert_eq!(
            odd,
            "await page.waitForNavigation({waitUntil: 'networkidle0'});\n"
        );
    }

    #[test]
    fn test_full_chained_sequence() {
        let script = ScriptBuilder::new()
            .goto("http://example.com")
            .add_script_tag("http://example.com/script.js")
            .evaluate("() => { return 'done'; }")
            .wait_for_selector("body")
            .click("button#close")
            .hover("button#menu")
            .focus("input#name")
            .clear_input("input#name")
            .type_text("input#name", "test user", 100)
            .select("select#country", ["US", "UK"])
            .keyboard_press("Enter", 1)
            .wait_for_delay(2000)
            .scroll_by(0, 500)
            .reload()
            .add_style_tag("body { background: red; }")
            .set_viewport(1920, 1080)
            .wait_for_function("window.ready === true")
            .set_cookie("session", "123", "example.com")
            .delete_cookie("old", "example.com")
            .scroll_to_bottom()
            .mouse_move(100, 200)
            .mouse_click_position(300, 400)
            .set_user_agent("MyAgent")
            .set_extra_http_headers(&BTreeMap::from([(
                "Authorization".to_string(),
                "Bearer token".to_string(),
            )]))
            .wait_for_xpath("//div[@id='test']")
            .click_and_wait_for_navigation("button#submit")
            .manual_wait()
            .render_content()
            .render_screenshot(true)
            .done()
            .build();

        let expected = "await page.goto('http://example.com');\n".to_string()
            + "await page.addScriptTag({url: 'http://example.com/script.js'});\n"
            + "await page.evaluate(() => { return 'done'; });\n"
            + "await page.waitForSelector('body');\n"
            + "await page.click('button#close');\n"
            + "await page.hover('button#menu');\n"
            + "await page.focus('input#name');\n"
            + "await page.evaluate((sel) => { document.querySelector(sel).value = ''; }, 'input#name');\n"
            + "await page.type('input#name', 'test user',{delay:100});\n"
            + "await page.select('select#country', 'US', 'UK');\n"
            + "await page.keyboard.press('Enter');\n"
            + "await page.waitForDelay(2000);\n"
            + "await page.evaluate((x, y) => { window.scrollBy(x, y); }, 0, 500);\n"
            + "await page.reload();\n"
            + "await page.addStyleTag({content: `body { background: red; }`});\n"
            + "await page.setViewport({width: 1920, height: 1080});\n"
            + "await page.waitForFunction(window.ready === true);\n"
            + "await page.setCookie({name: 'session', value: '123', domain: 'example.com'});\n"
            + "await page.deleteCookie({name: 'old', url: 'example.com'});\n"
            + "await page.evaluate(() => window.scrollTo(0, document.body.scrollHeight));\n"
            + "await page.mouse.move(100, 200);\n"
            + "await page.mouse.click(300, 400);\n"
            + "await page.setUserAgent('MyAgent');\n"
            + "await page.setExtraHTTPHeaders({'Authorization': 'Bearer token'});\n"
            + "await page.waitForXPath(\"//div[@id='test']\");\n"
            + "await Promise.all([\n  page.waitForNavigation(),\n  page.click('button#submit')\n]);\n"
            + "page.manualWait();\n"
            + "page.render.content();\n"
            + "await page.render.screenshot();\n"
            + "page.done();\n";

        assert_eq!(script, expected);
    }

    #[test]
    fn test_goto_with_wait_until() {
        let script = ScriptBuilder::new()
            .goto_with_wait_until("https://example.com", "networkidle0")
            .build();
        assert_eq!(
            script,
            "await page.goto('https://example.com', {waitUntil: 'networkidle0'});\n"
        );
    }

    #[test]
    fn test_history_navigation() {
        let script = ScriptBuilder::new().go_back().go_forward().build();
        assert_eq!(script, "await page.goBack();\nawait page.goForward();\n");
    }

    #[test]
    fn test_wait_for_url() {
        let script = ScriptBuilder::new().wait_for_url("/checkout").build();
        assert_eq!(
            script,
            "await page.waitForFunction((url) => window.location.href.includes(url), {}, '/checkout');\n"
        );
    }

    #[test]
    fn test_drag_and_drop() {
        let script = ScriptBuilder::new().drag_and_drop("#card", "#column").build();
        assert_eq!(script, "await page.dragAndDrop('#card', '#column');\n");
    }

    #[test]
    fn test_set_extra_http_headers_sorted_order() {
        let headers = BTreeMap::from([
            ("X-Second".to_string(), "2".to_string()),
            ("A-First".to_string(), "1".to_string()),
        ]);
        let script = ScriptBuilder::new().set_extra_http_headers(&headers).build();
        assert_eq!(
            script,
            "await page.setExtraHTTPHeaders({'A-First': '1', 'X-Second': '2'});\n"
        );
    }

    #[test]
    fn test_apply_viewport_emits_all_six_fields() {
        let mobile = Viewport {
            width: 390,
            height: 844,
            device_scale_factor: 3.0,
            is_mobile: true,
            has_touch: true,
            is_landscape: false,
        };
        let script = ScriptBuilder::new().apply_viewport(mobile).build();
        assert_eq!(
            script,
            "await page.setViewport({width:390,height:844,deviceScaleFactor:3,isMobile:true,hasTouch:true,isLandscape:false});\n"
        );

        let desktop = Viewport::new(1920, 1080);
        let script = ScriptBuilder::new().apply_viewport(desktop).build();
        assert!(script.contains("isMobile:false"));
        assert!(script.contains("deviceScaleFactor:0"));
    }

    #[test]
    fn test_use_profile_emits_ua_and_headers() {
        let profile = crate::presets::useragents::chrome_windows_profile();
        let script = ScriptBuilder::new().use_profile(&profile).build();

        assert!(script.contains("setUserAgent"));
        assert!(script.contains(&profile.user_agent));
        assert!(script.contains("setExtraHTTPHeaders"));
        assert!(script.contains("Accept-Language"));
    }

    #[test]
    fn test_use_profile_without_headers_emits_single_statement() {
        let profile = Profile {
            user_agent: "MyAgent/1.0".to_string(),
            headers: BTreeMap::new(),
        };
        let script = ScriptBuilder::new().use_profile(&profile).build();
        assert_eq!(script, "await page.setUserAgent(\"MyAgent/1.0\");\n");
    }

    #[test]
    fn test_apply_stealth() {
        let script = ScriptBuilder::new().apply_stealth().build();
        assert!(script.starts_with("await page.evaluateOnNewDocument("));
        assert!(script.contains("navigator.webdriver"));
        assert!(script.contains("chrome.csi"));
        assert!(script.ends_with(");\n"));
    }
}
