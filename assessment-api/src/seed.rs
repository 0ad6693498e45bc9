//! The fixed questionnaire and the destructive `init-db` bootstrap.
//!
//! Catalog position becomes each question's display order, which in turn fixes the
//! order of form sections and export columns.

use crate::error::AppResult;
use crate::storage::Database;
use shared_types::QuestionType;
use tracing::info;

use sections::*;

/// Section labels, stored verbatim on each question
pub mod sections {
    pub const PROGRAM_FLUENCY: &str = "KATATASAN SA PROGRAMA";
    pub const EDUCATION: &str = "EDUKASYON";
    pub const HEALTH: &str = "KALUSUGAN";
    pub const NUTRITION: &str = "NUTRISYON";
    pub const FAMILY_LIFE: &str = "PAMAMAHALA SA BUHAY PAMILYA";
    pub const LIVELIHOOD: &str = "KABUHAYAN AT KAALAMAN SA PANANALAPI";
    pub const PROBE_PROGRAM_FLUENCY: &str = "PAGSISIYASAT - KATATASAN SA PROGRAMA";
    pub const PROBE_EDUCATION: &str = "PAGSISIYASAT - EDUKASYON";
    pub const PROBE_HOUSEHOLD: &str = "PAGSISIYASAT - PAMAMAHALA SA SAMBAHAYAN";
    pub const PROBE_LIVELIHOOD: &str = "PAGSISIYASAT - KABUHAYAN AT KAALAMAN SA PANANALAPI";
    pub const PROBE_REFLECTION: &str = "PAGSISIYASAT - PANINILAY";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedQuestion {
    pub section: &'static str,
    pub question_type: QuestionType,
    pub text: &'static str,
}

const fn rating(section: &'static str, text: &'static str) -> SeedQuestion {
    SeedQuestion {
        section,
        question_type: QuestionType::Rating,
        text,
    }
}

const fn narrative(section: &'static str, text: &'static str) -> SeedQuestion {
    SeedQuestion {
        section,
        question_type: QuestionType::Narrative,
        text,
    }
}

pub const QUESTION_CATALOG: &[SeedQuestion] = &[
    rating(
        PROGRAM_FLUENCY,
        "Natutukoy ang mga layunin ng Pantawid Pamilyang Pilipino Program (4Ps)",
    ),
    rating(
        PROGRAM_FLUENCY,
        "Naipapaliwanag ang mga pamantayan sa pagpili ng mga pamilyang magiging miyembro ng Programa.",
    ),
    rating(PROGRAM_FLUENCY, "Naipapaliwanag ang mga kondisyon ng mga Programa."),
    rating(PROGRAM_FLUENCY, "Natutukoy ang mga nilalaman ng Panunumpa (Oath of Commitment)"),
    rating(PROGRAM_FLUENCY, "Naipapaliwanag ang Listahanan Assessment"),
    rating(
        PROGRAM_FLUENCY,
        "Naipapaliwanag ang Social Welfare Development Indicator (SWDI) bilang isa sa sukatan sa pag-graduate sa Programa",
    ),
    rating(PROGRAM_FLUENCY, "May nakasulat na Family Vision na nauunawaan ng lahat ng miyembro."),
    rating(
        PROGRAM_FLUENCY,
        "Kabahagi ang pamilya sa pagbuo ng plano o Household Intervention Plan",
    ),
    rating(
        PROGRAM_FLUENCY,
        "Natutukoy ang mga hakbang ng Case Management na pagdadaanan ng aming Pamilya.",
    ),
    rating(PROGRAM_FLUENCY, "Nauunawaaan ang mga batayan ng aming pagtatapos sa Programa."),
    rating(
        PROGRAM_FLUENCY,
        "Nagagawa ang wastong proseso ng pag-update ng mga datos ng aming pamilya.",
    ),
    rating(
        PROGRAM_FLUENCY,
        "Nagagawa ang tamang proseso sa paghain ng katanungan o reklamo sa programa.",
    ),
    rating(PROGRAM_FLUENCY, "Nauunawan ang prohibisyon o hindi naangkop sa programa"),

    rating(
        EDUCATION,
        "Nagpapatupad ng hakbangin para pahalagahan ang edukasyon para sa kinabukasan ng anak.",
    ),
    rating(
        EDUCATION,
        "Ang mga batang minomonitor ng programa sa pamilya ay pumapasok sa paaralan alinsunod sa tinakdang kondisyon.",
    ),
    rating(EDUCATION, "Naglalaan ng sapat na oras para kumustahin ang anak sa kanyang pag-aaral."),
    rating(
        EDUCATION,
        "Naglalaan ng sapat na oras para matulungan ang mga anak sa kanilang mga gawain sa paaralan.",
    ),
    rating(EDUCATION, "Naibibigay ang mga pangangailangan ng mga anak sa kanilang pag-aaral."),
    rating(EDUCATION, "Dumadalo sa mga Parent-Teacher Association (PTA) meeting."),

    rating(
        HEALTH,
        "Regular na nagpapacheck-up ang buntis na miyembro ng pamilya sa health center or health facility/clinic o hospital.",
    ),
    rating(HEALTH, "Kasunod nito ay ang pagpapost-natal Check-up matapos manganak."),
    rating(HEALTH, "Ang buntis ay nanganganak sa isang Accredited Birthing Facility."),
    rating(
        HEALTH,
        "Nagpapapurga ang mga batang edad 1-14 sa aming sambahayan dalawang beses sa isang taon.",
    ),
    rating(HEALTH, "Pinababakunahan ang mga batang edad 0 hanggang 23 buwan gulang."),
    rating(
        HEALTH,
        "Naipapatupad ang mga kaalaman sa unang isang libong (1000) araw ng buhay o F1KD pagkatapos magsilang ng anak.",
    ),
    rating(
        HEALTH,
        "Nag a-update ng datos tungkol sa kalusugan ng pamilya (halimbawa: nabuntis, nanganak at etc.).",
    ),
    rating(HEALTH, "Pinapainom ang mga anak ng bitaminang angkop sa kanilang edad."),
    rating(
        HEALTH,
        "Ang mga miyembro ng sambahayan ay nagpapakonsulta at tumatangkilik ng mga serbisyong pangkalusugan.",
    ),
    rating(
        HEALTH,
        "Ang bawat miyembro ng pamilya ay binibigyan ng suporta sa pagpapanatili ng kanilang kalusugan habang sila ay nagdadalang-tao, at para sa kalusugan ng mga batang may edad 0-5.",
    ),
    rating(
        HEALTH,
        "Gumagamit ng mga pamamaraan sa pagpaplano ng pamilya (Family Planning Method).",
    ),
    rating(
        HEALTH,
        "Ang pamilya ay may ligtas na pinagkukunan ng tubig sa pangkalahatang gamit (General Use) tulad ng pampaligo, panglaba, panghugas ng pinagkainan, panlinis ng bahay, atbp.",
    ),
    rating(
        HEALTH,
        "Ang mga miyembro ng pamilya ay naghuhugas ng kamay bago at pagkatapos kumain at pagkatapos gumamit ng palikuran gamit ang malinis na tubig at sabon.",
    ),
    rating(HEALTH, "Binibigyan ng karampatang lunas ang miyembro ng pamilya na may sakit."),

    rating(NUTRITION, "Ang mga batang edad 0-6 buwan ay eksklusibong pinapasuso ng gatas ng ina."),
    rating(
        NUTRITION,
        "Ang mga batang edad na anim na buwan ay binibigyan na ng pagkain at patuloy na pinapasuso ng gatas ng ina hanggang dalawang taon.",
    ),
    rating(NUTRITION, "Kumakain ng masusustansyang pagkain batay sa panuntunan ng Pinggang Pinoy."),
    rating(NUTRITION, "Kumakain ang sambahayan ng mga pinatibay na pagkain (Fortified Foods)"),
    rating(NUTRITION, "Ang mga batang nasa edad 0-5 taon ay nasa normal na timbang."),
    rating(NUTRITION, "Ang mga batang nasa edad 0-5 taon ay nasa normal na tangkad."),
    rating(NUTRITION, "Nagtatanim ng prutas o/at gulay sa bakuran."),
    rating(
        NUTRITION,
        "Kumakain ng gulay o/at prutas na galing sa gulayan sa sariling bakuran o barangay.",
    ),

    rating(
        FAMILY_LIFE,
        "Ako at ang aking asawa o partner ay may pantay na responsibilidad sa pagpapatakbo ng pamilya.",
    ),
    rating(
        FAMILY_LIFE,
        "Ako at ang aking asawa o partner ay pantay sa responsibilidad sa pagpapalaki sa aming mga anak.",
    ),
    rating(
        FAMILY_LIFE,
        "Ako at ang aking asawa o partner ay nagpapatupad ng hakbangin para mapanatili ang maayos na ugnayan ng pamilya.",
    ),
    rating(
        FAMILY_LIFE,
        "Naglalaan ng oras para sa one-on-one time para sa isa't isa (Family Bonding).",
    ),
    rating(FAMILY_LIFE, "Bukas ang komunikasyon ng pamilya."),
    rating(FAMILY_LIFE, "Nagtutulungan ang bawat miyembro ng pamilya sa gawaing bahay."),
    rating(
        FAMILY_LIFE,
        "Bahagi ang bawat miyembro ng aking pamilya sa mga desisyong pangsambahayan.",
    ),
    rating(
        FAMILY_LIFE,
        "Nagtutulungan ang bawat miyembro ng pamilya sa paghahanap ng solusyon o pagresolba sa mga problema.",
    ),
    rating(FAMILY_LIFE, "Pinapatupad ang wastong pagdidisiplina sa mga bata sa sambahayan."),
    rating(FAMILY_LIFE, "Nagpapakita ako ng pagmamahal at positibong damdamin sa aking mga anak"),
    rating(
        FAMILY_LIFE,
        "Sumusunod at tumutugon ako sa mga hakbangin o initisyatibo ng aking mga anak",
    ),
    rating(
        FAMILY_LIFE,
        "Nakikipag-usap ako ng malapit sa aking anak (mayroon man o walang salita)",
    ),
    rating(
        FAMILY_LIFE,
        "Napupuri ang bawat miyembro ng sambahayan sa kanilang mabuting gawi at tagumpay.",
    ),
    rating(FAMILY_LIFE, "Nakatuon ako sa mga interes at karanasan ng aking mga anak"),
    rating(
        FAMILY_LIFE,
        "Inilalarawan ko, binibigyang kahulugan at nagpapakita ako na may sigla sa mga karanasan at interes ng aking mga anak",
    ),
    rating(
        FAMILY_LIFE,
        "Pinapalawak at pinapayaman ko ang mga karanasan ng aking mga anak sa pamamagitan ng pagkonekta sa kanilang mga imahinasyon at lohika",
    ),
    rating(
        FAMILY_LIFE,
        "Sinusuportahan ko ang aking mga anak sa pamamagitan ng pagtatakda ng mga limitasyon sa positibong paraan, sa pamamagitan ng pagturo ng mga kahihinatnan at pag-aalok ng mga alternatibo",
    ),
    rating(
        FAMILY_LIFE,
        "Natutukoy ang mga palatandaan na maaaring may pinagdadaanang problema, isyu o suliranin ang miyembro ng pamilya.",
    ),
    rating(
        FAMILY_LIFE,
        "May kaalaman ang bawat miyembro ng sambahayan sa karapatang may kinalaman sa mga bata at kababaihan",
    ),
    rating(
        FAMILY_LIFE,
        "Ang batang nasa edad na 14 na taong gulang pababa sa aming sambahayan ay hindi naghahanap-buhay.",
    ),
    rating(
        FAMILY_LIFE,
        "Nagpapatupad ng patakarang pangkaligtasan ang pamilya laban sa anumang panganib, sakuna o disaster.",
    ),
    rating(FAMILY_LIFE, "Nakahanda ang emergency balde o bag na magagamit sa panahon ng sakuna."),
    rating(FAMILY_LIFE, "May nakasulat na Family Disaster Action Plan."),
    rating(FAMILY_LIFE, "May updated na Family Emergency Directory."),
    rating(FAMILY_LIFE, "Nauunawaan ang mga isyu at suliranin sa komunidad."),
    rating(FAMILY_LIFE, "Natutukoy ang tamang solusyon sa isyu at suliranin ng komunidad."),
    rating(
        FAMILY_LIFE,
        "Ako at ang aking pamilya ay aktibong nakikibahagi sa mga proyekto o aktibidad ng aming komunidad gaya ng Clean-Up drive at iba pang gawain.",
    ),
    rating(
        FAMILY_LIFE,
        "Nakakapag access ng iba’t-ibang programa ng pamahalaan o pribadong organisasyon batay sa aming pangangailangan.",
    ),
    rating(
        FAMILY_LIFE,
        "Anumang diskriminasyon at anyo ng karahasan sa kasarian ay hindi umiiral sa sambahayan.",
    ),
    rating(FAMILY_LIFE, "Natutukoy ang pagkakaiba ng Sex at Gender."),

    rating(
        LIVELIHOOD,
        "Nagagamit ang aming Cash Card sa iba pang pampinansyal na transaksyon (transaction account).",
    ),
    rating(
        LIVELIHOOD,
        "May isang miyembro ng pamilya ang may regular na hanapbuhay at kita (6 na buwan pataas nang kumikita).",
    ),
    rating(
        LIVELIHOOD,
        "Lumalahok sa mga aktibidad na nakakatulong upang mapalawak ang kaalaman ng pamilya sa tamang paghawak ng pera.",
    ),
    rating(LIVELIHOOD, "May nasusulat na planong pinansyal ang sambahayan."),
    rating(
        LIVELIHOOD,
        "Pinapatupad ng pamilya ang praktikal na hakbang sa pagbabadyet/ laang-gugulin.",
    ),
    rating(LIVELIHOOD, "Regular na pinag-uusapan ng pamilya ang kalagayang pinansyal."),
    rating(LIVELIHOOD, "Regular na sinusubaybayan ang mga gastos at badyet ng pamilya."),
    rating(
        LIVELIHOOD,
        "Marunong sa mga pangunahing mathematical operations gaya ng addition, subtraction, multiplication, at division.",
    ),
    rating(
        LIVELIHOOD,
        "Nakakapag-ipon gamit ang nakasanayang pamamaraan at hindi sa bangko (Conventional Method).",
    ),
    rating(LIVELIHOOD, "Nakakapag-ipon sa bangko."),
    rating(LIVELIHOOD, "Nakakapag-ipon para sa mga emergency na gastos."),
    rating(LIVELIHOOD, "Ginagamit ang iba't ibang Digital Financial Services."),
    rating(LIVELIHOOD, "Aktibong miyembro ng Insurance."),
    rating(LIVELIHOOD, "May mga napundar na ari-arian."),
    rating(LIVELIHOOD, "Nag-aacess ng tulong sa “Micro credit” institution."),
    rating(LIVELIHOOD, "May karanasan na gumawa ng plano para sa negosyo."),
    rating(
        LIVELIHOOD,
        "May karanasan sa pagbebenta ng mga produkto at paghihikayat ng mga mamimili.",
    ),
    rating(LIVELIHOOD, "Kumikita ang sambahayan mula sa bakuran/communal garden."),
    rating(LIVELIHOOD, "Mayroon ng kalayaang pang-pinansyal (financial freedom) ang sambahayan."),

    narrative(PROBE_PROGRAM_FLUENCY, "Ano ang layunin ng 4Ps?"),
    narrative(PROBE_PROGRAM_FLUENCY, "Anu-ano ang mga kondisyon ng programa?"),
    narrative(PROBE_PROGRAM_FLUENCY, "Ano ang batayan ng pagtatapos sa programa?"),
    narrative(PROBE_PROGRAM_FLUENCY, "Ano ang prohibisyon o hindi naangkop sa programa?"),

    narrative(PROBE_EDUCATION, "Ano ang kahalagahan ng edukasyon sa bata?"),
    narrative(PROBE_EDUCATION, "Ano ang kondisyon ng edukasyon sa programa?"),
    narrative(
        PROBE_EDUCATION,
        "Paano natutulungan at nasusuportahan ang anak sa kanilang pag-aaral?",
    ),

    narrative(PROBE_HOUSEHOLD, "Paano dinidisiplina ang mga bata sa sambahayan?"),
    narrative(
        PROBE_HOUSEHOLD,
        "Anu-ano ang mga karapatang may kinalaman sa mga bata at kababaihan?",
    ),
    narrative(
        PROBE_HOUSEHOLD,
        "Ano ang iba’t-ibang programa ng pamahalaan o pribadong organisasyon na na-access ng pamilya sa loob ng isang taon?",
    ),

    narrative(PROBE_LIVELIHOOD, "Ano ang mga karanasan sa pagbebenta ng mga produkto"),
    narrative(
        PROBE_LIVELIHOOD,
        "Ano ang kakayahan sa kabuhayan (livelihood skills) na nais matutunan?",
    ),

    narrative(
        PROBE_REFLECTION,
        "Base sa naging resulta ng inyong pagtatasa, alin sa mga pahayag sa taas ang mas tumatak sa inyo at bakit?",
    ),
];

/// Drops and recreates the schema, then inserts [`QUESTION_CATALOG`].
///
/// Every household, assessment and answer is destroyed.
pub fn reset_and_seed(db: &Database) -> AppResult<usize> {
    db.reset_schema()?;
    let inserted = db.insert_questions(QUESTION_CATALOG)?;
    info!(questions = inserted, "Database reset and question catalog seeded");
    Ok(inserted)
}
