use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

/// 25% gray
const HEADER_FILL: u32 = 0xC0C0C0;
const TOTAL_FILL: u32 = 0xFFFF99;

/// Cell formats shared by every month sheet
#[derive(Debug, Clone)]
pub(crate) struct ReportStyles {
    pub(crate) header: Format,
    pub(crate) day: Format,
    pub(crate) sum: Format,
    pub(crate) total_label: Format,
    pub(crate) total_sum: Format,
}

impl ReportStyles {
    pub(crate) fn new(sum_format: Option<&str>) -> Self {
        let header = Format::new()
            .set_align(FormatAlign::Center)
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(HEADER_FILL))
            .set_border(FormatBorder::Thin);
        let data = Format::new()
            .set_align(FormatAlign::Right)
            .set_border(FormatBorder::Thin);
        let total = Format::new()
            .set_align(FormatAlign::Right)
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(TOTAL_FILL))
            .set_border(FormatBorder::Thin);

        let (sum, total_sum) = match sum_format {
            Some(fmt) => (
                data.clone().set_num_format(fmt),
                total.clone().set_num_format(fmt),
            ),
            None => (data.clone(), total.clone()),
        };

        ReportStyles {
            header,
            day: data,
            sum,
            total_label: total,
            total_sum,
        }
    }
}
