use console::Style;
use curveview_core::transform::TransformParameters;
use curveview_core::validation::{Severity, ValidationIssue};
use curveview_core::view::ViewState;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    flag: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            flag: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::new().dim(),
        Severity::Warning => Style::new().yellow(),
        Severity::Critical => Style::new().red().bold(),
    }
}

fn on_off(s: &Styles, enabled: bool) -> String {
    if enabled {
        s.flag.apply_to("on").to_string()
    } else {
        s.disabled.apply_to("off").to_string()
    }
}

pub fn print_view_summary(state: &ViewState, params: &TransformParameters) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Curve View"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(10)));
    println!();

    if let Some(image) = state.background_image() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Background"),
            s.path.apply_to(image.path.display())
        );
        println!();
    }

    println!("  {}", s.header.apply_to("Sizes"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Display"),
        s.value.apply_to(format!("{}x{}", state.display_width(), state.display_height()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Widget"),
        s.value.apply_to(format!("{}x{}", state.widget_width(), state.widget_height()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{}x{}", state.image_width(), state.image_height()))
    );
    println!();

    println!("  {}", s.header.apply_to("View"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.1}%", state.zoom_factor() * 100.0))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Base scale"),
        s.value.apply_to(format!("{:.4}", state.base_scale()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pan"),
        s.value.apply_to(format!("{:.2}, {:.2}", state.offset_x(), state.offset_y()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Manual"),
        s.value.apply_to(format!(
            "{:.2}, {:.2}",
            state.manual_x_offset(),
            state.manual_y_offset()
        ))
    );
    println!("    {:<12}{}", s.label.apply_to("Flip Y"), on_off(&s, state.flip_y_axis()));
    println!(
        "    {:<12}{}",
        s.label.apply_to("To image"),
        on_off(&s, state.scale_to_image())
    );
    println!();

    println!("  {}", s.header.apply_to("Transform"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.6}", params.scale))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Image ratio"),
        s.value.apply_to(format!("{:.4}, {:.4}", params.image_scale_x, params.image_scale_y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Center"),
        s.value.apply_to(format!(
            "{:.2}, {:.2}",
            params.center_offset_x, params.center_offset_y
        ))
    );
    println!();
}

pub fn print_issues(title: &str, issues: &[ValidationIssue]) {
    let s = Styles::new();

    if issues.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to(title),
            s.flag.apply_to("no issues")
        );
        println!();
        return;
    }

    println!("  {}", s.header.apply_to(title));
    for issue in issues {
        let style = severity_style(issue.severity);
        println!(
            "    {:<10}{} = {}: {}",
            style.apply_to(issue.severity),
            s.label.apply_to(&issue.field),
            s.value.apply_to(issue.value),
            issue.message
        );
        println!("    {:<10}{}", "", s.disabled.apply_to(&issue.suggestion));
    }
    println!();
}
