//! Static title/description pairs for the per-technology detail pages.
//! Pure lookup; no engine logic involved.

/// Title and description for a technology code, `None` for unknown codes.
pub fn technology_description(code: u8) -> Option<(&'static str, &'static str)> {
    match code {
        1 => Some((
            "NG-fired Furnace",
            "NG-fired furnaces use natural gas as the primary fuel source to heat \
             the glass. They are commonly used in the industry due to the relatively \
             low cost and availability of natural gas.",
        )),
        2 => Some((
            "NG-Oxyfuel Furnace",
            "NG-Oxyfuel furnaces use a combination of natural gas and pure oxygen to \
             achieve higher combustion temperatures and improve efficiency. This \
             technology can reduce the volume of flue gas and lower emissions.",
        )),
        3 => Some((
            "Hybrid Furnace (Electric boosting)",
            "Hybrid furnaces combine traditional fuel sources like natural gas with \
             electric boosting to achieve higher temperatures and improve energy \
             efficiency. This approach can reduce CO2 emissions and improve control \
             over the glass melting process.",
        )),
        4 => Some((
            "All Electric Furnace",
            "All electric furnaces rely entirely on electricity to melt the glass. \
             These furnaces are capable of achieving high temperatures with precise \
             control, making them suitable for high-quality glass production. They \
             also eliminate direct CO2 emissions associated with combustion processes.",
        )),
        5 => Some((
            "H2-fired Furnace",
            "H2-fired furnaces use hydrogen as a fuel source, offering a carbon-free \
             alternative to traditional fossil fuels. Hydrogen combustion produces \
             water vapor as the only by-product, making it a promising option for \
             reducing greenhouse gas emissions in the glass industry.",
        )),
        _ => None,
    }
}
