use crate::constants::*;
use crate::core::{DecalId, Expression, Scene, SceneConfig};
use crate::dom;
use crate::overlay;
use crate::style;
use fnv::FnvHashMap;
use glam::Vec2;
use web_sys as web;

struct DecalNode {
    el: web::HtmlElement,
    fading: bool,
}

struct MascotNodes {
    root: web::HtmlElement,
    eyes: [web::HtmlElement; 2],
    pupils: [web::HtmlElement; 2],
    mouth: web::HtmlElement,
}

/// DOM side of the scene.
///
/// Owns one fixed layer with four stacked slots (gun, mascot, decals, text)
/// and mirrors `Scene` into inline styles each frame. The layer is removed
/// from the document on drop.
pub struct DomView {
    document: web::Document,
    layer: web::HtmlElement,
    gun: web::HtmlElement,
    crosshair: web::HtmlElement,
    mascot: MascotNodes,
    decal_slot: web::HtmlElement,
    decals: FnvHashMap<DecalId, DecalNode>,
    last_expression: Option<Expression>,
}

impl DomView {
    pub fn build(
        document: &web::Document,
        parent: &web::Node,
        config: &SceneConfig,
    ) -> anyhow::Result<Self> {
        let layer = dom::create_element(document, "div", "gun-cursor-layer", style::LAYER_STYLE)?;

        // Back to front: cursor graphic, mascot, decals, text overlay.
        let gun_slot = dom::create_element(document, "div", "gun-slot", &style::slot_style(1))?;
        let mascot_slot =
            dom::create_element(document, "div", "mascot-slot", &style::slot_style(2))?;
        let decal_slot = dom::create_element(document, "div", "decal-slot", &style::slot_style(3))?;
        let text_slot = dom::create_element(document, "div", "text-slot", &style::slot_style(4))?;
        for slot in [&gun_slot, &mascot_slot, &decal_slot, &text_slot] {
            dom::append(&layer, slot)?;
        }

        let gun = build_gun(document, config)?;
        dom::append(&gun_slot, &gun)?;

        let crosshair = dom::create_element(document, "div", "crosshair", "")?;
        for vertical in [true, false] {
            let arm = dom::create_element(
                document,
                "div",
                "crosshair-arm",
                &style::crosshair_arm_style(vertical, CROSSHAIR_ARM_PX, CROSSHAIR_THICKNESS_PX),
            )?;
            dom::append(&crosshair, &arm)?;
        }
        dom::append(&gun_slot, &crosshair)?;

        let mascot = build_mascot(document)?;
        dom::append(&mascot_slot, &mascot.root)?;

        let text = overlay::build(document)?;
        dom::append(&text_slot, &text)?;

        dom::append(parent, &layer)?;

        Ok(Self {
            document: document.clone(),
            layer,
            gun,
            crosshair,
            mascot,
            decal_slot,
            decals: FnvHashMap::default(),
            last_expression: None,
        })
    }

    pub fn render(&mut self, scene: &Scene) {
        let cfg = scene.config();
        _ = self.gun.set_attribute(
            "style",
            &style::gun_style(
                scene.gun_box(),
                cfg.gun.pivot_fraction,
                scene.aim().display_deg(),
                scene.gun_scale(),
                GUN_TRANSITION_MS,
            ),
        );
        _ = self
            .gun
            .set_attribute("class", if scene.is_firing() { "gun gun--firing" } else { "gun" });
        _ = self
            .gun
            .set_attribute("data-aim-deg", &format!("{:.1}", scene.aim().raw_deg()));
        _ = self
            .crosshair
            .set_attribute("style", &style::crosshair_style(scene.pointer()));

        self.render_mascot(scene);
        self.render_decals(scene);
    }

    fn render_mascot(&mut self, scene: &Scene) {
        let mascot = scene.mascot();
        let anchor = mascot.anchor();
        let expression = mascot.expression();
        _ = self
            .mascot
            .root
            .set_attribute("style", &style::mascot_style(anchor, expression));

        let alive = expression != Expression::Dead;
        let eye_centers = mascot.eye_anchors().map(|e| e - anchor.min);
        for i in 0..2 {
            _ = self.mascot.eyes[i]
                .set_attribute("style", &style::eye_style(eye_centers[i], EYE_SIZE_PX));
            _ = self.mascot.pupils[i].set_attribute(
                "style",
                &style::pupil_style(mascot.pupils()[i], PUPIL_SIZE_PX, alive),
            );
        }

        if self.last_expression != Some(expression) {
            _ = self
                .mascot
                .root
                .set_attribute("class", &format!("mascot mascot--{}", expression.as_str()));
            _ = self
                .mascot
                .mouth
                .set_attribute("style", style::mouth_style(expression));
            // Crossed-out eyes while dead.
            let mark = if alive { None } else { Some("×") };
            for eye in &self.mascot.eyes {
                if let Some(first) = eye.first_child() {
                    first.set_text_content(mark);
                }
            }
            self.last_expression = Some(expression);
        }
    }

    fn render_decals(&mut self, scene: &Scene) {
        let field = scene.decals();
        let fade_ms = field.timing().fade_ms;
        if field.is_empty() && self.decals.is_empty() {
            return;
        }

        self.decals.retain(|id, node| {
            let keep = field.get(*id).is_some();
            if !keep {
                node.el.remove();
            }
            keep
        });

        for decal in field.iter() {
            if let Some(node) = self.decals.get_mut(&decal.id) {
                if decal.fading && !node.fading {
                    _ = node.el.set_attribute(
                        "style",
                        &style::decal_style(decal.position, decal.variant, true, fade_ms),
                    );
                    node.fading = true;
                }
                continue;
            }
            let el = match dom::create_element(
                &self.document,
                "div",
                "bullet-hole",
                &style::decal_style(decal.position, decal.variant, decal.fading, fade_ms),
            ) {
                Ok(el) => el,
                Err(e) => {
                    log::warn!("[decal] {:?}", e);
                    continue;
                }
            };
            if let Err(e) = dom::append(&self.decal_slot, &el) {
                log::warn!("[decal] {:?}", e);
                continue;
            }
            self.decals.insert(
                decal.id,
                DecalNode {
                    el,
                    fading: decal.fading,
                },
            );
        }
    }
}

impl Drop for DomView {
    fn drop(&mut self) {
        self.layer.remove();
    }
}

fn build_gun(document: &web::Document, config: &SceneConfig) -> anyhow::Result<web::HtmlElement> {
    let gun = dom::create_element(document, "div", "gun", "")?;
    let size = Vec2::new(config.gun.width_px, config.gun.height_px);
    let pivot = config.gun.pivot_fraction * size;
    let barrel = dom::create_element(
        document,
        "div",
        "gun-barrel",
        &style::barrel_style(
            pivot,
            config.calibration_deg,
            GUN_BARREL_LENGTH_PX,
            GUN_BARREL_THICKNESS_PX,
        ),
    )?;
    let grip = dom::create_element(
        document,
        "div",
        "gun-grip",
        &style::grip_style(pivot, GUN_GRIP_SIZE_PX),
    )?;
    dom::append(&gun, &barrel)?;
    dom::append(&gun, &grip)?;
    Ok(gun)
}

fn build_mascot(document: &web::Document) -> anyhow::Result<MascotNodes> {
    let root = dom::create_element(document, "div", "mascot mascot--idle", "")?;
    let (eye_l, pupil_l) = build_eye(document)?;
    let (eye_r, pupil_r) = build_eye(document)?;
    let mouth = dom::create_element(document, "div", "mascot-mouth", "")?;
    for part in [&eye_l, &eye_r, &mouth] {
        dom::append(&root, part)?;
    }
    Ok(MascotNodes {
        root,
        eyes: [eye_l, eye_r],
        pupils: [pupil_l, pupil_r],
        mouth,
    })
}

fn build_eye(document: &web::Document) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let eye = dom::create_element(document, "div", "mascot-eye", "")?;
    // Text node used for the crossed-out look.
    let mark = document.create_text_node("");
    dom::append(&eye, &mark)?;
    let pupil = dom::create_element(document, "div", "mascot-pupil", "")?;
    dom::append(&eye, &pupil)?;
    Ok((eye, pupil))
}
