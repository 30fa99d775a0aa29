// Production-type color catalog

/// ENTSO-E PSR type codes used for default chart visibility.
pub const PSR_SOLAR: &str = "B16";
pub const PSR_WIND_OFFSHORE: &str = "B18";
pub const PSR_WIND_ONSHORE: &str = "B19";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryColor {
    pub base: String,
    pub darker: String,
}

/// Fixed base-color table, keyed by PSR type code.
fn catalog_entry(code: &str) -> Option<(&'static str, &'static str)> {
    let entry = match code {
        "A03" => ("Mixed", "hsl(0,0%,50%)"),
        "A04" => ("Generation", "hsl(0,0%,100%)"),
        "A05" => ("Load", "hsl(0,0%,0%)"),
        "B01" => ("Biomass", "hsl(120,100%,25%)"),
        "B02" => ("Fossil Brown Coal Lignite", "hsl(30,100%,29%)"),
        "B03" => ("Fossil Coal Derived Gas", "hsl(0,0%,66%)"),
        "B04" => ("Fossil Gas", "hsl(0,0%,83%)"),
        "B05" => ("Fossil Hard Coal", "hsl(0,0%,0%)"),
        "B06" => ("Fossil Oil", "hsl(240,100%,27%)"),
        "B07" => ("Fossil Oil Shale", "hsl(0,100%,25%)"),
        "B08" => ("Fossil Peat", "hsl(25,76%,31%)"),
        "B09" => ("Geothermal", "hsl(16,100%,50%)"),
        "B10" => ("Hydro Pumped Storage", "hsl(180,100%,50%)"),
        "B11" => ("Hydro Run Of River And Poundage", "hsl(195,100%,50%)"),
        "B12" => ("Hydro Water Reservoir", "hsl(240,100%,50%)"),
        "B13" => ("Marine", "hsl(240,100%,40%)"),
        "B14" => ("Nuclear", "hsl(51,100%,50%)"),
        "B15" => ("Other Renewable", "hsl(120,61%,50%)"),
        "B16" => ("Solar", "hsl(60,100%,50%)"),
        "B17" => ("Waste", "hsl(0,100%,50%)"),
        "B18" => ("Wind Offshore", "hsl(197,71%,73%)"),
        "B19" => ("Wind Onshore", "hsl(195,53%,79%)"),
        "B20" => ("Other", "hsl(0,0%,75%)"),
        "B21" => ("Ac Link", "hsl(328,100%,54%)"),
        "B22" => ("Dc Link", "hsl(300,76%,72%)"),
        "B23" => ("Substation", "hsl(39,100%,50%)"),
        "B24" => ("Transformer", "hsl(350,100%,88%)"),
        _ => return None,
    };
    Some(entry)
}

/// Catalog name for a category code, independent of any API payload.
pub fn display_name(code: &str) -> Option<&'static str> {
    catalog_entry(code).map(|(name, _)| name)
}

/// Base and darker fill colors for a category code, or `None` for codes the
/// catalog does not know. Callers must treat `None` as "unstyled", never as
/// an error.
pub fn color_of(code: &str) -> Option<CategoryColor> {
    let (_, base) = catalog_entry(code)?;
    Some(CategoryColor {
        base: base.to_string(),
        darker: darker_variant(base),
    })
}

/// Derive the darker variant of an `hsl(H,S%,L%)` string by lowering
/// lightness 5 percentage points. Lightness is intentionally not clamped, so
/// an already-black base like `hsl(0,0%,0%)` derives `hsl(0,0%,-5%)`.
fn darker_variant(base: &str) -> String {
    let Some(inner) = base
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return base.to_string();
    };
    let mut parts = inner.split(',');
    let (Some(hue), Some(saturation), Some(lightness)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return base.to_string();
    };
    let Ok(lightness) = lightness.trim_end_matches('%').parse::<i32>() else {
        return base.to_string();
    };
    format!("hsl({},{},{}%)", hue, saturation, lightness - 5)
}
