use eframe::egui::{self, Color32, Pos2, RichText, ScrollArea, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{generate_palette, heat_color, medal_color, sex_color};
use crate::data::aggregate::{
    gender_by_year, gender_totals, games_totals, medals_by_region, medals_by_sport,
    region_totals, GroupCount, MedalBreakdown,
};
use crate::data::model::{Medal, OlympicDataset, Sex};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – every toggled view, recomputed from the dataset on render
// ---------------------------------------------------------------------------

pub fn central_view(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data folder to explore the Games  (File → Open data folder…)");
        });
        return;
    }

    let views = state.views;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if let Some(ds) = &state.dataset {
                if views.data_info {
                    data_info_section(ui, ds);
                }
                if views.gender {
                    gender_section(ui, ds);
                }
                if views.yearly_totals {
                    let groups = games_totals(&ds.records);
                    heat_bar_section(
                        ui,
                        "games_totals",
                        "Athlete Participation 1896-2016",
                        &groups,
                    );
                }
                if views.country_totals {
                    let groups = region_totals(&ds.records);
                    heat_bar_section(
                        ui,
                        "region_totals",
                        "Country Participation 1896-2016",
                        &groups,
                    );
                }
                if views.medals_by_country {
                    let breakdown = medals_by_region(&ds.records);
                    medal_country_section(ui, &breakdown);
                }
                if views.medals_by_sport {
                    let breakdown = medals_by_sport(&ds.records);
                    medal_sport_section(ui, &breakdown);
                }
            }
            if views.prediction {
                prediction_section(ui, state);
            }
        });
}

// ---------------------------------------------------------------------------
// Data information
// ---------------------------------------------------------------------------

fn data_info_section(ui: &mut Ui, ds: &OlympicDataset) {
    ui.heading("Description");
    ui.label(
        "A historical look at the Olympic Games from 1896 to 2016, joined \
         with the NOC → region lookup table. One row per athlete per event.",
    );
    ui.add_space(4.0);
    ui.strong("Features");
    ui.label(
        "ID, Name, Sex, Age, Height, Weight, Team, NOC, Games, Year, Season, \
         City, Sport, Event, Medal, Region, Notes",
    );
    ui.add_space(4.0);
    ui.strong("Raw data (first 5 rows)");

    egui::Grid::new("raw_rows").striped(true).show(ui, |ui: &mut Ui| {
        for header in ["ID", "Name", "Sex", "Age", "NOC", "Games", "Sport", "Medal", "Region"] {
            ui.strong(header);
        }
        ui.end_row();

        for rec in ds.records.iter().take(5) {
            ui.label(rec.id.to_string());
            ui.label(&rec.name);
            ui.label(rec.sex.map(|s| s.to_string()).unwrap_or_default());
            ui.label(rec.age.map(|a| format!("{a:.0}")).unwrap_or_else(|| "NA".into()));
            ui.label(&rec.noc);
            ui.label(rec.games.clone().unwrap_or_else(|| "NA".into()));
            ui.label(&rec.sport);
            ui.label(rec.medal.map(|m| m.to_string()).unwrap_or_else(|| "NA".into()));
            ui.label(rec.region.clone().unwrap_or_else(|| "NA".into()));
            ui.end_row();
        }
    });
    ui.separator();
}

// ---------------------------------------------------------------------------
// Gender representation: stacked per-year histogram + participation donut
// ---------------------------------------------------------------------------

fn gender_section(ui: &mut Ui, ds: &OlympicDataset) {
    ui.heading("Gender Representation 1896-2016");

    let by_year = gender_by_year(&ds.records);

    let male_bars: Vec<Bar> = by_year
        .iter()
        .map(|yc| {
            Bar::new(yc.year as f64, yc.male as f64)
                .name(format!("{} Male", yc.year))
                .width(1.6)
        })
        .collect();
    let female_bars: Vec<Bar> = by_year
        .iter()
        .map(|yc| {
            Bar::new(yc.year as f64, yc.female as f64)
                .name(format!("{} Female", yc.year))
                .width(1.6)
        })
        .collect();

    let male_chart = BarChart::new(male_bars)
        .color(sex_color(Sex::Male))
        .name("Male");
    let female_chart = BarChart::new(female_bars)
        .color(sex_color(Sex::Female))
        .name("Female")
        .stack_on(&[&male_chart]);

    Plot::new("gender_by_year")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label("Year")
        .y_axis_label("Participants")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(male_chart);
            plot_ui.bar_chart(female_chart);
        });

    ui.add_space(8.0);
    ui.heading("Total Ratio Of Participants");

    let totals = gender_totals(&ds.records);
    let colors = generate_palette(2);
    donut(
        ui,
        &[
            ("Male Participants".to_string(), totals.male as f64, colors[0]),
            ("Female Participants".to_string(), totals.female as f64, colors[1]),
        ],
    );
    ui.separator();
}

/// A minimal donut chart drawn with the painter (hole in the middle, legend
/// to the right).
fn donut(ui: &mut Ui, slices: &[(String, f64, Color32)]) {
    let total: f64 = slices.iter().map(|(_, v, _)| *v).sum();

    ui.horizontal(|ui: &mut Ui| {
        let (response, painter) = ui.allocate_painter(Vec2::splat(200.0), egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.45;

        if total > 0.0 {
            let mut angle = -std::f32::consts::FRAC_PI_2;
            for (_, value, color) in slices {
                let sweep = (*value / total) as f32 * std::f32::consts::TAU;
                // Fan of thin triangles; convex polygons only.
                let steps = (sweep / 0.05).ceil().max(1.0) as usize;
                let step = sweep / steps as f32;
                for i in 0..steps {
                    let a0 = angle + step * i as f32;
                    let a1 = a0 + step;
                    let p0 = arc_point(center, radius, a0);
                    let p1 = arc_point(center, radius, a1);
                    painter.add(Shape::convex_polygon(
                        vec![center, p0, p1],
                        *color,
                        Stroke::NONE,
                    ));
                }
                angle += sweep;
            }
            // Punch the hole.
            painter.circle_filled(center, radius * 0.55, ui.visuals().panel_fill);
        }

        ui.vertical(|ui: &mut Ui| {
            for (label, value, color) in slices {
                let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                ui.label(
                    RichText::new(format!("⏺ {label}: {value:.0} ({share:.1}%)"))
                        .color(*color),
                );
            }
        });
    });
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

// ---------------------------------------------------------------------------
// Single-key counted views, bars coloured by magnitude
// ---------------------------------------------------------------------------

fn heat_bar_section(ui: &mut Ui, id: &str, title: &str, groups: &[GroupCount]) {
    ui.heading(title);

    let max = groups.iter().map(|g| g.count).max().unwrap_or(1).max(1) as f64;
    let bars: Vec<Bar> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.count as f64)
                .name(&g.key)
                .fill(heat_color(g.count as f64 / max))
        })
        .collect();

    Plot::new(id.to_string())
        .height(320.0)
        .y_axis_label("Total Participants")
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
    ui.separator();
}

// ---------------------------------------------------------------------------
// Medals won per country – one chart per medal, standing in for the
// choropleth maps of the source dashboard
// ---------------------------------------------------------------------------

fn medal_country_section(ui: &mut Ui, breakdown: &MedalBreakdown) {
    for (medal, series, title) in [
        (Medal::Gold, &breakdown.gold, "Countries that Won Gold Medals"),
        (Medal::Silver, &breakdown.silver, "Countries that Won Silver Medals"),
        (Medal::Bronze, &breakdown.bronze, "Countries that Won Bronze Medals"),
    ] {
        ui.heading(title);

        // Largest winners first; readability stand-in for map shading.
        let mut sorted: Vec<&GroupCount> = series.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

        let bars: Vec<Bar> = sorted
            .iter()
            .enumerate()
            .map(|(i, g)| {
                Bar::new(i as f64, g.count as f64)
                    .name(&g.key)
                    .fill(medal_color(medal))
            })
            .collect();

        Plot::new(format!("medals_by_country_{medal}"))
            .height(260.0)
            .y_axis_label("Medals")
            .show_axes([false, true])
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
    ui.separator();
}

// ---------------------------------------------------------------------------
// Medals per sporting event – stacked gold/silver/bronze series
// ---------------------------------------------------------------------------

fn medal_sport_section(ui: &mut Ui, breakdown: &MedalBreakdown) {
    ui.heading("Medals per Sporting Event");

    // Union of sport keys across the three series keeps the x positions
    // aligned for stacking.
    let mut sports: Vec<&str> = Vec::new();
    for series in [&breakdown.gold, &breakdown.silver, &breakdown.bronze] {
        for g in series {
            if !sports.contains(&g.key.as_str()) {
                sports.push(&g.key);
            }
        }
    }
    sports.sort_unstable();

    let series_bars = |series: &[GroupCount], medal: Medal| -> Vec<Bar> {
        series
            .iter()
            .map(|g| {
                let x = sports.iter().position(|s| *s == g.key).unwrap_or(0);
                Bar::new(x as f64, g.count as f64)
                    .name(format!("{} {medal}", g.key))
            })
            .collect()
    };

    let gold = BarChart::new(series_bars(&breakdown.gold, Medal::Gold))
        .color(medal_color(Medal::Gold))
        .name("Gold");
    let silver = BarChart::new(series_bars(&breakdown.silver, Medal::Silver))
        .color(medal_color(Medal::Silver))
        .name("Silver")
        .stack_on(&[&gold]);
    let bronze = BarChart::new(series_bars(&breakdown.bronze, Medal::Bronze))
        .color(medal_color(Medal::Bronze))
        .name("Bronze")
        .stack_on(&[&gold, &silver]);

    Plot::new("medals_by_sport")
        .legend(Legend::default())
        .height(320.0)
        .y_axis_label("Total Medals")
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(gold);
            plot_ui.bar_chart(silver);
            plot_ui.bar_chart(bronze);
        });
    ui.separator();
}

// ---------------------------------------------------------------------------
// Medal prediction – two independent subjects, same predict call
// ---------------------------------------------------------------------------

fn prediction_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Medal Prediction");
    state.ensure_predictor();

    if let Some(err) = &state.predictor_error {
        ui.label(RichText::new(format!("Prediction unavailable: {err}")).color(Color32::RED));
        ui.separator();
        return;
    }

    let (sports, regions) = match &state.dataset {
        Some(ds) => (ds.sports.clone(), ds.regions.clone()),
        None => return,
    };

    let mut clicked: Option<usize> = None;
    ui.columns(2, |cols: &mut [Ui]| {
        for (idx, col) in cols.iter_mut().enumerate() {
            let form = &mut state.forms[idx];
            col.strong(format!("Athlete {}", idx + 1));

            egui::ComboBox::from_id_salt(format!("sex_{idx}"))
                .selected_text(&form.sex)
                .show_ui(col, |ui: &mut Ui| {
                    for sex in ["M", "F"] {
                        if ui.selectable_label(form.sex == sex, sex).clicked() {
                            form.sex = sex.to_string();
                        }
                    }
                });
            col.add(egui::Slider::new(&mut form.age, 10.0..=70.0).text("Age"));
            col.add(egui::Slider::new(&mut form.height, 120.0..=220.0).text("Height (cm)"));
            col.add(egui::Slider::new(&mut form.weight, 30.0..=150.0).text("Weight (kg)"));

            egui::ComboBox::from_id_salt(format!("sport_{idx}"))
                .selected_text(&form.sport)
                .show_ui(col, |ui: &mut Ui| {
                    for sport in &sports {
                        if ui.selectable_label(form.sport == *sport, sport).clicked() {
                            form.sport = sport.clone();
                        }
                    }
                });
            egui::ComboBox::from_id_salt(format!("region_{idx}"))
                .selected_text(&form.region)
                .show_ui(col, |ui: &mut Ui| {
                    for region in &regions {
                        if ui.selectable_label(form.region == *region, region).clicked() {
                            form.region = region.clone();
                        }
                    }
                });

            if col.button("Predict").clicked() {
                clicked = Some(idx);
            }
            if let Some(result) = &form.result {
                col.label(result);
            }
        }
    });

    if let Some(idx) = clicked {
        state.run_prediction(idx);
    }
    ui.separator();
}
