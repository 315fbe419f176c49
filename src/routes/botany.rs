//! Plant-physiology calculators: closed-form formulas recomputed as the
//! inputs change. Denominators are clamped away from zero so the forms never
//! divide by a cleared field.

use super::{set_result, wire_form};
use crate::dom::{self, EventListener};
use crate::router::Teardown;
use std::rc::Rc;
use web_sys::Element;

const MIN_BIOMASS_G: f64 = 0.001;
const MIN_TRANSPIRATION: f64 = 0.001;
const MIN_GROUND_AREA_M2: f64 = 0.001;

/// Light-saturation curve `A(I) = A_max · (1 − e^(−k·I))`.
#[must_use]
pub fn photosynthesis_rate(a_max: f64, k: f64, irradiance: f64) -> f64 {
	a_max * (1.0 - (-k * irradiance).exp())
}

/// Relative growth rate `(ln W₂ − ln W₁) / Δt`, with Δt at least one day.
#[must_use]
pub fn relative_growth_rate(w1_grams: f64, w2_grams: f64, t1_days: f64, t2_days: f64) -> f64 {
	let w1 = w1_grams.max(MIN_BIOMASS_G);
	let w2 = w2_grams.max(MIN_BIOMASS_G);
	let days = (t2_days - t1_days).max(1.0);
	(w2.ln() - w1.ln()) / days
}

/// Water-use efficiency `A / E`.
#[must_use]
pub fn water_use_efficiency(assimilation: f64, transpiration: f64) -> f64 {
	assimilation / transpiration.max(MIN_TRANSPIRATION)
}

/// Leaf-area index `leaf area / ground area`.
#[must_use]
pub fn leaf_area_index(leaf_area_m2: f64, ground_area_m2: f64) -> f64 {
	leaf_area_m2 / ground_area_m2.max(MIN_GROUND_AREA_M2)
}

/// Transpiration `E = g_s · VPD`.
#[must_use]
pub fn transpiration_rate(conductance: f64, vpd_kpa: f64) -> f64 {
	conductance * vpd_kpa
}

/// Cumulative growing degree-days `Σ max(0, T − T_base)`.
#[must_use]
pub fn cumulative_gdd(base_temp: f64, daily_means: &[f64]) -> f64 {
	daily_means
		.iter()
		.map(|temp| (temp - base_temp).max(0.0))
		.sum()
}

const BOTANY_HTML: &str = r#"
<p class="hero-label">Botany</p>
<h1 class="hero-title">Plant physiology, live</h1>
<p class="hero-subtitle">Six closed-form models; every field recomputes as you type.</p>
<div class="calc-grid">
	<form class="calc-form" id="botany-photo">
		<h3>Photosynthesis light response</h3>
		<label>A<sub>max</sub> (&mu;mol CO&#8322; m&#8315;&#178; s&#8315;&#185;) <input id="photo-amax" type="number" step="0.1" value="25"></label>
		<label>k (per &mu;mol) <input id="photo-k" type="number" step="0.001" value="0.004"></label>
		<label>Irradiance I (&mu;mol m&#8315;&#178; s&#8315;&#185;) <input id="photo-i" type="number" step="10" value="500"></label>
		<p class="calc-result" id="botany-result-photo"></p>
	</form>
	<form class="calc-form" id="botany-rgr">
		<h3>Relative growth rate</h3>
		<label>W&#8321; (g) <input id="rgr-w1" type="number" step="0.1" value="1.2"></label>
		<label>W&#8322; (g) <input id="rgr-w2" type="number" step="0.1" value="3.4"></label>
		<label>t&#8321; (days) <input id="rgr-t1" type="number" step="1" value="0"></label>
		<label>t&#8322; (days) <input id="rgr-t2" type="number" step="1" value="10"></label>
		<p class="calc-result" id="botany-result-rgr"></p>
	</form>
	<form class="calc-form" id="botany-wue">
		<h3>Water-use efficiency</h3>
		<label>Assimilation A (&mu;mol CO&#8322;) <input id="wue-a" type="number" step="0.1" value="18"></label>
		<label>Transpiration E (mmol H&#8322;O) <input id="wue-e" type="number" step="0.1" value="4"></label>
		<p class="calc-result" id="botany-result-wue"></p>
	</form>
	<form class="calc-form" id="botany-lai">
		<h3>Leaf-area index</h3>
		<label>Leaf area (m&#178;) <input id="lai-leaf-area" type="number" step="0.1" value="6"></label>
		<label>Ground area (m&#178;) <input id="lai-ground-area" type="number" step="0.1" value="2"></label>
		<p class="calc-result" id="botany-result-lai"></p>
	</form>
	<form class="calc-form" id="botany-transpiration">
		<h3>Transpiration</h3>
		<label>Stomatal conductance g&#8347; <input id="transpiration-gs" type="number" step="0.01" value="0.3"></label>
		<label>VPD (kPa) <input id="transpiration-vpd" type="number" step="0.1" value="1.2"></label>
		<p class="calc-result" id="botany-result-transpiration"></p>
	</form>
	<form class="calc-form" id="botany-gdd">
		<h3>Growing degree-days</h3>
		<label>Base temperature (&deg;C) <input id="gdd-base" type="number" step="0.5" value="10"></label>
		<label>Day 1 (&deg;C) <input id="gdd-day-1" type="number" step="0.5" value="18"></label>
		<label>Day 2 (&deg;C) <input id="gdd-day-2" type="number" step="0.5" value="16"></label>
		<label>Day 3 (&deg;C) <input id="gdd-day-3" type="number" step="0.5" value="21"></label>
		<label>Day 4 (&deg;C) <input id="gdd-day-4" type="number" step="0.5" value="19"></label>
		<label>Day 5 (&deg;C) <input id="gdd-day-5" type="number" step="0.5" value="23"></label>
		<p class="calc-result" id="botany-result-gdd"></p>
	</form>
</div>
"#;

pub fn render(content: &Element) -> Option<Teardown> {
	content.set_inner_html(BOTANY_HTML);

	let mut listeners: Vec<EventListener> = Vec::new();
	let forms: [(&str, Rc<dyn Fn()>); 6] = [
		("botany-photo", Rc::new(update_photosynthesis)),
		("botany-rgr", Rc::new(update_rgr)),
		("botany-wue", Rc::new(update_wue)),
		("botany-lai", Rc::new(update_lai)),
		("botany-transpiration", Rc::new(update_transpiration)),
		("botany-gdd", Rc::new(update_gdd)),
	];
	for (form_id, update) in forms {
		listeners.extend(wire_form(form_id, update));
	}

	Some(Box::new(move || drop(listeners)))
}

fn update_photosynthesis() {
	let a_max = dom::numeric_value("photo-amax");
	let k = dom::numeric_value("photo-k");
	let irradiance = dom::numeric_value("photo-i");
	let rate = photosynthesis_rate(a_max, k, irradiance);
	set_result(
		"botany-result-photo",
		&format!("A({irradiance}) = <strong>{rate:.2} &mu;mol CO&#8322; m&#8315;&#178; s&#8315;&#185;</strong>"),
	);
}

fn update_rgr() {
	let w1 = dom::numeric_value("rgr-w1");
	let w2 = dom::numeric_value("rgr-w2");
	let t1 = dom::numeric_value("rgr-t1");
	let t2 = dom::numeric_value("rgr-t2");
	let rgr = relative_growth_rate(w1, w2, t1, t2);
	let days = (t2 - t1).max(1.0);
	set_result(
		"botany-result-rgr",
		&format!("RGR = <strong>{rgr:.4} day&#8315;&#185;</strong> over {days:.1} days"),
	);
}

fn update_wue() {
	let wue = water_use_efficiency(dom::numeric_value("wue-a"), dom::numeric_value("wue-e"));
	set_result(
		"botany-result-wue",
		&format!("WUE = <strong>{wue:.2} &mu;mol CO&#8322; per mmol H&#8322;O</strong>"),
	);
}

fn update_lai() {
	let lai = leaf_area_index(
		dom::numeric_value("lai-leaf-area"),
		dom::numeric_value("lai-ground-area"),
	);
	set_result(
		"botany-result-lai",
		&format!("LAI = <strong>{lai:.2} m&#178; leaf per m&#178; ground</strong>"),
	);
}

fn update_transpiration() {
	let vpd = dom::numeric_value("transpiration-vpd");
	let rate = transpiration_rate(dom::numeric_value("transpiration-gs"), vpd);
	set_result(
		"botany-result-transpiration",
		&format!("E = <strong>{rate:.2}</strong> at VPD = {vpd:.2} kPa"),
	);
}

fn update_gdd() {
	let base = dom::numeric_value("gdd-base");
	let daily: Vec<f64> = (1..=5)
		.map(|day| dom::numeric_value(&format!("gdd-day-{day}")))
		.collect();
	let total = cumulative_gdd(base, &daily);
	set_result(
		"botany-result-gdd",
		&format!("Total GDD = <strong>{total:.2} degree-days</strong>"),
	);
}

#[cfg(test)]
mod tests {
	use super::{
		cumulative_gdd, leaf_area_index, photosynthesis_rate, relative_growth_rate,
		transpiration_rate, water_use_efficiency,
	};

	fn assert_close(actual: f64, expected: f64) {
		assert!(
			(actual - expected).abs() < 1e-9,
			"expected {expected}, got {actual}"
		);
	}

	#[test]
	fn photosynthesis_starts_dark_and_saturates() {
		assert_close(photosynthesis_rate(25.0, 0.004, 0.0), 0.0);
		let dim = photosynthesis_rate(25.0, 0.004, 100.0);
		let bright = photosynthesis_rate(25.0, 0.004, 1000.0);
		assert!(dim < bright);
		assert!(bright < 25.0);
	}

	#[test]
	fn rgr_is_log_ratio_over_days() {
		assert_close(
			relative_growth_rate(2.0, 4.0, 0.0, 2.0),
			std::f64::consts::LN_2 / 2.0,
		);
	}

	#[test]
	fn rgr_clamps_degenerate_inputs() {
		// Zero biomass and a reversed interval still produce a finite rate.
		let rate = relative_growth_rate(0.0, 3.0, 5.0, 5.0);
		assert!(rate.is_finite());
		assert_close(rate, (3.0_f64.ln() - 0.001_f64.ln()) / 1.0);
	}

	#[test]
	fn wue_clamps_zero_transpiration() {
		assert_close(water_use_efficiency(18.0, 4.0), 4.5);
		assert_close(water_use_efficiency(1.0, 0.0), 1000.0);
	}

	#[test]
	fn lai_is_area_ratio() {
		assert_close(leaf_area_index(6.0, 2.0), 3.0);
	}

	#[test]
	fn transpiration_scales_with_vpd() {
		assert_close(transpiration_rate(0.3, 1.2), 0.36);
	}

	#[test]
	fn gdd_ignores_days_below_base() {
		assert_close(cumulative_gdd(10.0, &[12.0, 9.0, 15.0]), 7.0);
		assert_close(cumulative_gdd(10.0, &[]), 0.0);
	}
}
