//! HTML page for the dashboard, rendered with minijinja and drawn with Plotly.js

use crate::data::DatasetSummary;
use crate::error::Result;
use crate::layout::Layout;
use minijinja::{context, Environment};

/// HTML template for the dashboard page
const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ layout.title }}</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        :root {
            --bg-primary: #f5f5f5;
            --bg-secondary: #ffffff;
            --text-primary: #503D36;
            --text-secondary: #6e7681;
            --border-color: #d0d7de;
            --accent-blue: #1f77b4;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
        }

        h1 {
            text-align: center;
            color: var(--text-primary);
            font-size: 40px;
            margin-bottom: 1.5rem;
        }

        .controls, .graph {
            background: var(--bg-secondary);
            border: 1px solid var(--border-color);
            border-radius: 8px;
            padding: 1rem 1.5rem;
            margin-bottom: 1.5rem;
        }

        select, input[type="search"] {
            width: 100%;
            padding: 0.5rem;
            font-size: 1rem;
            border: 1px solid var(--border-color);
            border-radius: 4px;
        }

        input[type="search"] {
            margin-bottom: 0.5rem;
        }

        .slider-row {
            display: flex;
            gap: 1rem;
            align-items: center;
        }

        .slider-row input[type="range"] {
            flex: 1;
        }

        .slider-value {
            min-width: 10rem;
            text-align: right;
            font-variant-numeric: tabular-nums;
            color: var(--accent-blue);
        }

        .marks {
            display: flex;
            justify-content: space-between;
            color: var(--text-secondary);
            font-size: 0.85rem;
        }

        footer {
            text-align: center;
            padding: 1rem;
            color: var(--text-secondary);
            font-size: 0.9rem;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>{{ layout.title }}</h1>

        <div class="controls">
            {% if layout.site_dropdown.searchable %}
            <input type="search" id="{{ layout.site_dropdown.id }}-search" placeholder="{{ layout.site_dropdown.placeholder }}">
            {% endif %}
            <select id="{{ layout.site_dropdown.id }}">
                {% for option in layout.site_dropdown.options %}
                <option value="{{ option.value }}"{% if option.value == layout.site_dropdown.value %} selected{% endif %}>{{ option.label }}</option>
                {% endfor %}
            </select>
        </div>

        <div class="graph" id="{{ layout.pie_graph.id }}"></div>

        <div class="controls">
            <p>{{ layout.slider_label }}</p>
            <div class="slider-row" id="{{ layout.payload_slider.id }}">
                <input type="range" data-bound="low"
                       min="{{ layout.payload_slider.min }}" max="{{ layout.payload_slider.max }}"
                       step="{{ layout.payload_slider.step }}" value="{{ layout.payload_slider.value[0] }}">
                <input type="range" data-bound="high"
                       min="{{ layout.payload_slider.min }}" max="{{ layout.payload_slider.max }}"
                       step="{{ layout.payload_slider.step }}" value="{{ layout.payload_slider.value[1] }}">
                <span class="slider-value"></span>
            </div>
            <div class="marks">
                {% for mark in layout.payload_slider.marks %}
                <span>{{ mark.label }}</span>
                {% endfor %}
            </div>
        </div>

        <div class="graph" id="{{ layout.scatter_graph.id }}"></div>

        <footer>
            {% if summary %}
            <p>{{ summary.records }} launches loaded at {{ loaded_at }}</p>
            {% endif %}
        </footer>
    </div>

    <script>
        window.DASHBOARD_LAYOUT = {{ layout_json | safe }};

        document.addEventListener('DOMContentLoaded', function() {
            const layout = window.DASHBOARD_LAYOUT;
            const dropdown = document.getElementById(layout.site_dropdown.id);
            const search = document.getElementById(layout.site_dropdown.id + '-search');
            const slider = document.getElementById(layout.payload_slider.id);
            const low = slider.querySelector('[data-bound="low"]');
            const high = slider.querySelector('[data-bound="high"]');
            const display = slider.querySelector('.slider-value');

            // The range inputs snap to the step; keep the unsnapped initial bounds until moved
            let payload = layout.payload_slider.value.slice();

            function showPayload() {
                display.textContent = payload[0] + ' - ' + payload[1] + ' kg';
            }

            function values() {
                return { 'site-dropdown': dropdown.value, 'payload-slider': payload };
            }

            async function update(changed) {
                const response = await fetch('api/update', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ changed: changed, values: values() })
                });
                if (!response.ok) {
                    console.error('update failed', response.status, await response.text());
                    return;
                }
                const body = await response.json();
                body.data.forEach(update => {
                    Plotly.react(update.output, update.figure.data, update.figure.layout, { responsive: true });
                });
            }

            if (search) {
                search.addEventListener('input', function() {
                    const term = search.value.toLowerCase();
                    Array.from(dropdown.options).forEach(option => {
                        option.hidden = term !== '' && !option.text.toLowerCase().includes(term);
                    });
                });
            }

            dropdown.addEventListener('change', () => update(layout.site_dropdown.id));

            [low, high].forEach(input => {
                input.addEventListener('input', function() {
                    payload = [Number(low.value), Number(high.value)].sort((a, b) => a - b);
                    showPayload();
                });
                input.addEventListener('change', () => update(layout.payload_slider.id));
            });

            showPayload();
            update(null);
        });
    </script>
</body>
</html>
"#;

/// Render the dashboard page for a layout
pub fn generate_page(layout: &Layout, summary: Option<&DatasetSummary>) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("dashboard", DASHBOARD_TEMPLATE)?;

    let template = env.get_template("dashboard")?;

    let layout_json = serde_json::to_string(layout)?;
    let loaded_at = summary.map(|s| s.loaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    let html = template.render(context! {
        layout => layout,
        layout_json => layout_json,
        summary => summary,
        loaded_at => loaded_at,
    })?;

    Ok(html)
}
