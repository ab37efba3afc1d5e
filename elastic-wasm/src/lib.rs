use elastic_core::{
    CursorRig, FollowerConfig, Magnet, MagnetConfig, RenderState, StickyRegion, Vector2D,
};
use elastic_shared::{FollowerSettings, MagnetSettings, PoseFrame};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

const BUBBLED_CLASS: &str = "is-bubbled";

/// Turns `requestAnimationFrame` timestamps (ms) into elapsed seconds
#[derive(Debug, Default)]
struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last {
            Some(prev) => ((timestamp_ms - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        dt as f32
    }
}

fn region_of(element: &Element) -> StickyRegion {
    let rect = element.get_bounding_client_rect();
    StickyRegion::from_rect(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn css_transform(state: &RenderState) -> String {
    format!(
        "translate({}px, {}px) rotate({}deg) scale({}, {})",
        state.translate.x, state.translate.y, state.rotation, state.scale.x, state.scale.y
    )
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Elastic cursor bound to one page element.
///
/// The page forwards its pointer listeners to `move_to`, `hover_enter` and
/// `hover_exit`, and calls `frame` from its animation loop.
#[wasm_bindgen]
pub struct ElasticCursor {
    rig: CursorRig,
    node: HtmlElement,
    target: Option<Element>,
    clock: FrameClock,
    frames: u64,
    last: Option<RenderState>,
}

#[wasm_bindgen]
impl ElasticCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(node: HtmlElement) -> Result<ElasticCursor, JsValue> {
        Self::build(node, FollowerConfig::default())
    }

    /// Builds a cursor from `FollowerSettings` JSON; missing fields keep their defaults.
    pub fn with_settings(node: HtmlElement, settings_json: &str) -> Result<ElasticCursor, JsValue> {
        let settings: FollowerSettings = serde_json::from_str(settings_json).map_err(js_error)?;
        let config = settings.into_config().map_err(js_error)?;
        Self::build(node, config)
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        if let Some(target) = &self.target {
            // layout may have moved the region since it was entered
            self.rig.refresh_target(region_of(target));
        }
        self.rig.pointer_move(x as f32, y as f32);
    }

    pub fn hover_enter(&mut self, area: Element) {
        self.rig.hover_enter(region_of(&area));
        self.target = Some(area);
    }

    pub fn hover_exit(&mut self) {
        self.rig.hover_exit();
        self.target = None;
    }

    /// Advances one frame and writes the element's transform.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        let dt = self.clock.tick(timestamp_ms);
        let state = self.rig.frame(dt);

        self.node
            .style()
            .set_property("transform", &css_transform(&state))?;

        self.frames += 1;
        self.last = Some(state);
        Ok(())
    }

    pub fn is_stuck(&self) -> bool {
        self.rig.follower().is_stuck()
    }

    /// Last rendered pose as a plain JS object, or `null` before the first frame.
    pub fn last_pose(&self) -> Result<JsValue, JsValue> {
        let Some(state) = self.last else {
            return Ok(JsValue::NULL);
        };
        let json =
            serde_json::to_string(&PoseFrame::from_render(self.frames, &state)).map_err(js_error)?;
        js_sys::JSON::parse(&json)
    }
}

impl ElasticCursor {
    fn build(node: HtmlElement, config: FollowerConfig) -> Result<ElasticCursor, JsValue> {
        let rig = CursorRig::new(config).map_err(js_error)?;
        console_log!(
            "Elastic cursor ready (smoothing {}, stuck scale {})",
            config.position_smoothing,
            config.stuck_scale
        );

        Ok(ElasticCursor {
            rig,
            node,
            target: None,
            clock: FrameClock::default(),
            frames: 0,
            last: None,
        })
    }
}

/// Sticky element that leans toward the pointer hovering it
#[wasm_bindgen]
pub struct StickyMagnet {
    magnet: Magnet,
    node: HtmlElement,
    clock: FrameClock,
}

#[wasm_bindgen]
impl StickyMagnet {
    #[wasm_bindgen(constructor)]
    pub fn new(node: HtmlElement) -> Result<StickyMagnet, JsValue> {
        Self::build(node, MagnetConfig::default())
    }

    pub fn with_settings(node: HtmlElement, settings_json: &str) -> Result<StickyMagnet, JsValue> {
        let settings: MagnetSettings = serde_json::from_str(settings_json).map_err(js_error)?;
        let config = settings.into_config().map_err(js_error)?;
        Self::build(node, config)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let region = region_of(&self.node);
        self.magnet
            .pointer_move(Vector2D::new(x as f32, y as f32), &region);
    }

    pub fn release(&mut self) {
        self.magnet.release();
    }

    /// Toggles the class the stylesheet uses to show the cursor is stuck here.
    pub fn set_bubbled(&self, bubbled: bool) -> Result<(), JsValue> {
        self.node
            .class_list()
            .toggle_with_force(BUBBLED_CLASS, bubbled)?;
        Ok(())
    }

    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        let dt = self.clock.tick(timestamp_ms);
        let offset = self.magnet.step(dt);
        self.node.style().set_property(
            "transform",
            &format!("translate({}px, {}px)", offset.x, offset.y),
        )
    }

    pub fn is_settled(&self) -> bool {
        self.magnet.is_settled()
    }
}

impl StickyMagnet {
    fn build(node: HtmlElement, config: MagnetConfig) -> Result<StickyMagnet, JsValue> {
        let magnet = Magnet::new(config).map_err(js_error)?;
        Ok(StickyMagnet {
            magnet,
            node,
            clock: FrameClock::default(),
        })
    }
}
