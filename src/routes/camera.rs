//! Photography calculators: field of view, exposure, depth of field, and
//! crop factor. Same shape as the botany screen, same clamping discipline.

use super::{set_result, wire_form};
use crate::dom::{self, EventListener};
use crate::router::Teardown;
use std::rc::Rc;
use web_sys::Element;

const MIN_FOCAL_MM: f64 = 1.0;
const MIN_F_NUMBER: f64 = 0.7;
const MIN_SHUTTER_S: f64 = 0.0005;
const MIN_ISO: f64 = 50.0;
const MIN_SUBJECT_M: f64 = 0.2;
const MIN_COC_MM: f64 = 0.005;

/// Horizontal field of view `2 · atan(w / 2f)` in degrees.
#[must_use]
pub fn horizontal_fov_degrees(sensor_width_mm: f64, focal_length_mm: f64) -> f64 {
	let width = sensor_width_mm.max(1.0);
	let focal = focal_length_mm.max(MIN_FOCAL_MM);
	(width / (2.0 * focal)).atan().to_degrees() * 2.0
}

/// Light admitted by the aperture relative to f/1: `1 / N²`.
#[must_use]
pub fn relative_light(f_number: f64) -> f64 {
	let n = f_number.max(MIN_F_NUMBER);
	1.0 / (n * n)
}

/// ISO-adjusted exposure value `log₂(N²/t) − log₂(ISO/100)`.
#[must_use]
pub fn exposure_value(f_number: f64, shutter_seconds: f64, iso: f64) -> f64 {
	let n = f_number.max(MIN_F_NUMBER);
	let t = shutter_seconds.max(MIN_SHUTTER_S);
	let iso = iso.max(MIN_ISO);
	((n * n) / t).log2() - (iso / 100.0).log2()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthOfField {
	pub hyperfocal_mm: f64,
	pub near_mm: f64,
	/// `None` once the subject sits at or beyond the hyperfocal distance.
	pub far_mm: Option<f64>,
}

/// Near/far limits of acceptable sharpness around a focused subject.
#[must_use]
pub fn depth_of_field(
	focal_length_mm: f64,
	f_number: f64,
	subject_distance_m: f64,
	coc_mm: f64,
) -> DepthOfField {
	let f = focal_length_mm.max(MIN_FOCAL_MM);
	let n = f_number.max(1.0);
	let s = subject_distance_m.max(MIN_SUBJECT_M) * 1000.0;
	let c = coc_mm.max(MIN_COC_MM);

	let hyperfocal = (f * f) / (n * c) + f;
	let near = (hyperfocal * s) / (hyperfocal + (s - f));
	let far = if hyperfocal > s {
		Some((hyperfocal * s) / (hyperfocal - (s - f)))
	} else {
		None
	};

	DepthOfField {
		hyperfocal_mm: hyperfocal,
		near_mm: near,
		far_mm: far,
	}
}

/// 35 mm-equivalent focal length `f · crop`.
#[must_use]
pub fn equivalent_focal_length(focal_length_mm: f64, crop_factor: f64) -> f64 {
	focal_length_mm.max(MIN_FOCAL_MM) * crop_factor.max(0.5)
}

const CAMERA_HTML: &str = r#"
<p class="hero-label">Camera</p>
<h1 class="hero-title">Lens math, live</h1>
<p class="hero-subtitle">Optics formulas recomputed as you type.</p>
<div class="calc-grid">
	<form class="calc-form" id="camera-fov">
		<h3>Field of view</h3>
		<label>Sensor width (mm) <input id="fov-sensor-width" type="number" step="0.1" value="36"></label>
		<label>Focal length (mm) <input id="fov-focal-length" type="number" step="1" value="24"></label>
		<p class="calc-result" id="camera-result-fov"></p>
	</form>
	<form class="calc-form" id="camera-exposure">
		<h3>Aperture &amp; exposure</h3>
		<label>f-number <input id="aperture-f-number" type="number" step="0.1" value="2.8"></label>
		<label>Shutter (s) <input id="aperture-shutter" type="number" step="0.001" value="0.008"></label>
		<label>ISO <input id="aperture-iso" type="number" step="50" value="200"></label>
		<p class="calc-result" id="camera-result-exposure"></p>
	</form>
	<form class="calc-form" id="camera-dof">
		<h3>Depth of field</h3>
		<label>Focal length (mm) <input id="dof-focal" type="number" step="1" value="50"></label>
		<label>f-number <input id="dof-f-number" type="number" step="0.1" value="8"></label>
		<label>Subject distance (m) <input id="dof-distance" type="number" step="0.1" value="5"></label>
		<label>Circle of confusion (mm) <input id="dof-coc" type="number" step="0.005" value="0.03"></label>
		<p class="calc-result" id="camera-result-dof"></p>
	</form>
	<form class="calc-form" id="camera-crop">
		<h3>Crop factor</h3>
		<label>Focal length (mm) <input id="crop-focal" type="number" step="1" value="35"></label>
		<label>Crop factor <input id="crop-factor" type="number" step="0.1" value="1.5"></label>
		<p class="calc-result" id="camera-result-crop"></p>
	</form>
</div>
"#;

pub fn render(content: &Element) -> Option<Teardown> {
	content.set_inner_html(CAMERA_HTML);

	let mut listeners: Vec<EventListener> = Vec::new();
	let forms: [(&str, Rc<dyn Fn()>); 4] = [
		("camera-fov", Rc::new(update_fov)),
		("camera-exposure", Rc::new(update_exposure)),
		("camera-dof", Rc::new(update_dof)),
		("camera-crop", Rc::new(update_crop)),
	];
	for (form_id, update) in forms {
		listeners.extend(wire_form(form_id, update));
	}

	Some(Box::new(move || drop(listeners)))
}

fn update_fov() {
	let fov = horizontal_fov_degrees(
		dom::numeric_value("fov-sensor-width"),
		dom::numeric_value("fov-focal-length"),
	);
	set_result(
		"camera-result-fov",
		&format!("Horizontal FOV &asymp; <strong>{fov:.1}&deg;</strong>"),
	);
}

fn update_exposure() {
	let f_number = dom::numeric_value("aperture-f-number");
	let shutter = dom::numeric_value("aperture-shutter");
	let iso = dom::numeric_value("aperture-iso");
	let light = relative_light(f_number);
	let ev = exposure_value(f_number, shutter, iso);
	set_result(
		"camera-result-exposure",
		&format!(
			"Relative light from aperture &asymp; <strong>{light:.3}</strong>; EV &asymp; <strong>{ev:.2}</strong>"
		),
	);
}

fn update_dof() {
	let dof = depth_of_field(
		dom::numeric_value("dof-focal"),
		dom::numeric_value("dof-f-number"),
		dom::numeric_value("dof-distance"),
		dom::numeric_value("dof-coc"),
	);
	let near_m = dof.near_mm / 1000.0;
	let (far_text, span_text) = match dof.far_mm {
		Some(far_mm) => (
			format!("{:.2} m", far_mm / 1000.0),
			format!("{:.2} m", (far_mm - dof.near_mm) / 1000.0),
		),
		None => ("&infin;".to_owned(), "&infin;".to_owned()),
	};
	set_result(
		"camera-result-dof",
		&format!(
			"Near &asymp; <strong>{near_m:.2} m</strong>, Far &asymp; <strong>{far_text}</strong>, DOF &asymp; <strong>{span_text}</strong>"
		),
	);
}

fn update_crop() {
	let equivalent = equivalent_focal_length(
		dom::numeric_value("crop-focal"),
		dom::numeric_value("crop-factor"),
	);
	set_result(
		"camera-result-crop",
		&format!("35mm equivalent focal length &asymp; <strong>{equivalent:.1} mm</strong>"),
	);
}
