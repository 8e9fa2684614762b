use std::collections::HashMap;

use lazy_static::lazy_static;


pub const TREND_COLOR : &str = "lime";
pub const FALLBACK_COLOR : &str = "gray";

pub const HIGHLIGHT_TITLE : &str = "Nordic Countries";

pub const HIGHLIGHT : &[(&str,&str)] = &[
    ("World", "darkmagenta"),
    ("Denmark", "black"),
    ("Norway", "red"),
    ("Sweden", "yellow"),
    ("Finland", "cyan"),
    ("Iceland", "navy"),
];

/// Display color per country. Some colors repeat.
const COUNTRY_COLORS : &[(&str,&str)] = &[
    ("Afghanistan", "palevioletred"),
    ("Algeria", "crimson"),
    ("Angola", "burlywood"),
    ("Antigua and Barbuda", "lightyellow"),
    ("Argentina", "slateblue"),
    ("Armenia", "salmon"),
    ("Australia", "black"),
    ("Austria", "gold"),
    ("Bahamas", "mediumslateblue"),
    ("Bahrain", "seagreen"),
    ("Bangladesh", "navy"),
    ("Barbados", "snow"),
    ("Belarus", "darkslategrey"),
    ("Belgium", "magenta"),
    ("Belize", "lightsalmon"),
    ("Benin", "royalblue"),
    ("Bhutan", "mediumseagreen"),
    ("Bolivia", "darkblue"),
    ("Botswana", "tomato"),
    ("Brazil", "pink"),
    ("Brunei", "brown"),
    ("Bulgaria", "cornflowerblue"),
    ("Burkina Faso", "olivedrab"),
    ("Burundi", "yellow"),
    ("Cambodia", "lightslategrey"),
    ("Cameroon", "darkcyan"),
    ("Canada", "lightgray"),
    ("Cape Verde", "darkolivegreen"),
    ("Central African Republic", "slategrey"),
    ("Chad", "cyan"),
    ("Chile", "mintcream"),
    ("China", "mediumorchid"),
    ("Colombia", "turquoise"),
    ("Cook Islands", "white"),
    ("Costa Rica", "red"),
    ("Cote d'Ivoire", "olive"),
    ("Croatia", "lightskyblue"),
    ("Cuba", "peachpuff"),
    ("Cyprus", "plum"),
    ("Czech Republic", "cornsilk"),
    ("Democratic Republic of Congo", "blue"),
    ("Denmark", "gray"),
    ("Djibouti", "teal"),
    ("Dominica", "mediumvioletred"),
    ("Dominican Republic", "lightgreen"),
    ("Ecuador", "firebrick"),
    ("Egypt", "seashell"),
    ("El Salvador", "lawngreen"),
    ("Equatorial Guinea", "mediumspringgreen"),
    ("Eritrea", "palegoldenrod"),
    ("Estonia", "tan"),
    ("Eswatini", "palegreen"),
    ("Ethiopia", "green"),
    ("Fiji", "darkorchid"),
    ("Finland", "green"),
    ("France", "lightcoral"),
    ("French Polynesia", "darkorange"),
    ("Gabon", "aquamarine"),
    ("Gambia", "fuchsia"),
    ("Germany", "black"),
    ("Ghana", "lime"),
    ("Greece", "cyan"),
    ("Grenada", "lightslategray"),
    ("Guatemala", "darkmagenta"),
    ("Guinea", "navy"),
    ("Guinea-Bissau", "orange"),
    ("Guyana", "darkgreen"),
    ("Haiti", "linen"),
    ("Honduras", "darkseagreen"),
    ("Hungary", "rosybrown"),
    ("Iceland", "silver"),
    ("India", "magenta"),
    ("Indonesia", "lavender"),
    ("Iraq", "aliceblue"),
    ("Ireland", "darkgoldenrod"),
    ("Italy", "indianred"),
    ("Jamaica", "darkkhaki"),
    ("Jordan", "bisque"),
    ("Kazakhstan", "slategray"),
    ("Kenya", "limegreen"),
    ("Kiribati", "khaki"),
    ("Kuwait", "mediumturquoise"),
    ("Kyrgyzstan", "ivory"),
    ("Laos", "skyblue"),
    ("Latvia", "blue"),
    ("Lebanon", "darkgrey"),
    ("Lesotho", "peru"),
    ("Liberia", "sandybrown"),
    ("Libya", "gray"),
    ("Liechtenstein", "paleturquoise"),
    ("Lithuania", "maroon"),
    ("Luxembourg", "mediumblue"),
    ("Madagascar", "forestgreen"),
    ("Malawi", "deepskyblue"),
    ("Malaysia", "gainsboro"),
    ("Maldives", "oldlace"),
    ("Mali", "blanchedalmond"),
    ("Malta", "sienna"),
    ("Marshall Islands", "lightblue"),
    ("Mauritania", "darkturquoise"),
    ("Mauritius", "chartreuse"),
    ("Mexico", "coral"),
    ("Micronesia", "lightgoldenrodyellow"),
    ("Morocco", "green"),
    ("Mozambique", "thistle"),
    ("Myanmar", "lightcyan"),
    ("Namibia", "beige"),
    ("Nauru", "orangered"),
    ("Nepal", "mediumpurple"),
    ("Netherlands", "aqua"),
    ("New Caledonia", "goldenrod"),
    ("New Zealand", "darkred"),
    ("Nicaragua", "mediumaquamarine"),
    ("Niger", "azure"),
    ("Nigeria", "darksalmon"),
    ("Niue", "darkviolet"),
    ("Norway", "hotpink"),
    ("Oman", "chocolate"),
    ("Pakistan", "lightsteelblue"),
    ("Palau", "red"),
    ("Palestine", "moccasin"),
    ("Panama", "yellowgreen"),
    ("Papua New Guinea", "purple"),
    ("Paraguay", "papayawhip"),
    ("Peru", "indigo"),
    ("Philippines", "dimgray"),
    ("Poland", "darkslategray"),
    ("Portugal", "midnightblue"),
    ("Qatar", "red"),
    ("Republic of Congo", "honeydew"),
    ("Romania", "cadetblue"),
    ("Russia", "lightgrey"),
    ("Rwanda", "greenyellow"),
    ("Saint Kitts and Nevis", "orchid"),
    ("Saint Vincent and the Grenadines", "black"),
    ("Saint Lucia", "yellow"),
    ("Samoa", "rebeccapurple"),
    ("Sao Tome and Principe", "lemonchiffon"),
    ("Saudi Arabia", "mistyrose"),
    ("Senegal", "violet"),
    ("Seychelles", "wheat"),
    ("Sierra Leone", "steelblue"),
    ("Singapore", "dimgrey"),
    ("Slovakia", "powderblue"),
    ("Slovenia", "lightseagreen"),
    ("Solomon Islands", "saddlebrown"),
    ("Somalia", "deeppink"),
    ("South Africa", "darkgray"),
    ("South Korea", "grey"),
    ("South Sudan", "lavenderblush"),
    ("Spain", "springgreen"),
    ("Sri Lanka", "blueviolet"),
    ("Sudan", "darkslateblue"),
    ("Suriname", "lightpink"),
    ("Sweden", "dodgerblue"),
    ("Switzerland", "blue"),
    ("Syria", "palevioletred"),
    ("Taiwan", "crimson"),
    ("Tanzania", "burlywood"),
    ("Thailand", "lightyellow"),
    ("Togo", "slateblue"),
    ("Tonga", "salmon"),
    ("Trinidad and Tobago", "black"),
    ("Tunisia", "gold"),
    ("Tuvalu", "mediumslateblue"),
    ("Uganda", "seagreen"),
    ("United Arab Emirates", "navy"),
    ("United Kingdom", "snow"),
    ("United States", "darkslategrey"),
    ("Uruguay", "magenta"),
    ("Vanuatu", "lightsalmon"),
    ("Venezuela", "royalblue"),
    ("Vietnam", "mediumseagreen"),
    ("Western Sahara", "darkblue"),
    ("Yemen", "tomato"),
    ("Zambia", "pink"),
    ("Zimbabwe", "brown"),
];

lazy_static! {
    pub static ref COLORS : HashMap<&'static str,&'static str> =
	COUNTRY_COLORS.iter().cloned().collect();
}


const EUROPE : &[&str] = &[
    "Austria", "Belgium", "Bulgaria", "Croatia", "Cyprus", "Czech Republic",
    "Denmark", "Estonia", "Finland", "France", "Germany", "Greece", "Hungary",
    "Ireland", "Iceland", "Italy", "Latvia", "Liechtenstein", "Lithuania",
    "Luxembourg", "Malta", "Netherlands", "Norway", "Poland", "Portugal",
    "Romania", "Slovakia", "Slovenia", "Spain", "Sweden", "Switzerland",
    "United Kingdom",
];

const AFRICA : &[&str] = &[
    "Algeria", "Angola", "Benin", "Botswana", "Burkina Faso", "Burundi",
    "Cape Verde", "Cameroon", "Central African Republic", "Chad",
    "Cote d'Ivoire", "Democratic Republic of Congo", "Djibouti", "Egypt",
    "Equatorial Guinea", "Eritrea", "Ethiopia", "Gabon", "Gambia", "Ghana",
    "Guinea", "Guinea-Bissau", "Kenya", "Liberia", "Libya", "Madagascar",
    "Malawi", "Mali", "Mauritania", "Mauritius", "Morocco", "Mozambique",
    "Namibia", "Niger", "Nigeria", "Rwanda", "Western Sahara",
    "Sao Tome and Principe", "Senegal", "Seychelles", "Sierra Leone",
    "Somalia", "South Africa", "South Sudan", "Sudan", "Tanzania", "Togo",
    "Tunisia", "Uganda", "Zambia", "Zimbabwe",
];

const AMERICAS : &[&str] = &[
    "Antigua and Barbuda", "Argentina", "Bahamas", "Barbados", "Belize",
    "Bolivia", "Brazil", "Canada", "Chile", "Colombia", "Costa Rica", "Cuba",
    "Dominica", "Dominican Republic", "Ecuador", "El Salvador", "Grenada",
    "Guatemala", "Guyana", "Haiti", "Honduras", "Jamaica", "Mexico",
    "Nicaragua", "Panama", "Paraguay", "Peru", "Saint Kitts and Nevis",
    "Saint Vincent and the Grenadines", "Saint Lucia", "Suriname",
    "Trinidad and Tobago", "United States", "Uruguay", "Venezuela",
];

const ARABIA : &[&str] = &[
    "Algeria", "Bahrain", "Djibouti", "Egypt", "Iraq", "Jordan", "Kuwait",
    "Lebanon", "Libya", "Mauritania", "Morocco", "Oman", "Palestine", "Qatar",
    "Saudi Arabia", "Somalia", "Sudan", "Syria", "Tunisia",
    "United Arab Emirates", "Yemen",
];

const EURASIA : &[&str] = &[
    "Armenia", "Belarus", "Kazakhstan", "Kyrgyzstan", "Russia",
];

const EAST_ASIA : &[&str] = &[
    "Brunei", "Cambodia", "China", "Indonesia", "Laos", "Malaysia", "Myanmar",
    "Philippines", "Singapore", "South Korea", "Taiwan", "Thailand",
    "Vietnam",
];

const SOUTH_ASIA : &[&str] = &[
    "Afghanistan", "Bangladesh", "Bhutan", "India", "Maldives", "Nepal",
    "Pakistan", "Sri Lanka",
];

const PACIFIC_ISLANDS : &[&str] = &[
    "Australia", "New Caledonia", "Papua New Guinea", "New Zealand", "Fiji",
];


pub const GROUPS : &[(&str,&[&str])] = &[
    ("Europe", EUROPE),
    ("Africa", AFRICA),
    ("Americas", AMERICAS),
    ("Arabia", ARABIA),
    ("Eurasia", EURASIA),
    ("East Asia", EAST_ASIA),
    ("South Asia", SOUTH_ASIA),
    ("Pacific Islands", PACIFIC_ISLANDS),
];


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn every_grouped_region_has_a_color() {
	for (title,regions) in GROUPS {
	    for region in regions.iter() {
		assert!(COLORS.contains_key(region), "{} in {} has no color", region, title);
	    }
	}
    }

    #[test]
    fn country_table_has_no_duplicates() {
	assert_eq!(COLORS.len(), COUNTRY_COLORS.len());
    }

}
