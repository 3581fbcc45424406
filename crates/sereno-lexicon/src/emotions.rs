//! The static emotion table.
//!
//! One entry per label, in canonical order. Keyword matching is
//! whole-token only, so the multi-word entries ("me encanta",
//! "nadie entiende", ...) are never hit by the tokenizer; they are kept as
//! recorded lexical coverage for a future phrase-aware matcher.

use sereno_domain::EmotionLabel;

/// Static definition of one detectable emotion.
#[derive(Debug, Clone, Copy)]
pub struct EmotionDef {
    /// The label this entry defines
    pub label: EmotionLabel,

    /// Display glyph, purely presentational
    pub glyph: &'static str,

    /// Signed per-occurrence weight; the sign carries valence, scoring
    /// uses the magnitude
    pub base_intensity: i8,

    /// Lowercase trigger words
    pub keywords: &'static [&'static str],
}

/// Glyph used when no emotion matched.
pub const NEUTRAL_GLYPH: &str = "⚪";

/// Every emotion definition, in canonical order.
pub static EMOTIONS: [EmotionDef; EmotionLabel::COUNT] = [
    EmotionDef {
        label: EmotionLabel::Joy,
        glyph: "🟢",
        base_intensity: 2,
        keywords: &[
            "feliz", "alegre", "contento", "joyoso", "divertido", "risa",
            "reír", "sonrisa", "genial", "increíble", "excelente", "maravilloso",
            "asombroso", "fantástico", "hermoso", "bonito", "amor", "adoro",
            "me encanta", "amo", "afortunado", "bendito", "celebro", "éxito",
            "bien", "buen", "bueno", "positivo", "optimista", "radiante",
            "euforia", "jubilo", "regocijo", "gozo", "satisfacción", "diversión",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Sadness,
        glyph: "🔵",
        base_intensity: -3,
        keywords: &[
            "triste", "tristeza", "deprimido", "deprimida", "solo", "soledad",
            "lloro", "llorar", "lágrimas", "dolor", "sufrimiento", "pena",
            "desdicha", "infeliz", "desgraciado", "melancólico", "afligido",
            "abatido", "desconsuelo", "angustia", "me duele", "duelo", "pérdida",
            "mal", "malo", "desaliento", "desmoralizado", "depresión", "hundido",
            "derrotado", "lamento", "arrepentimiento", "nostalgia",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Anxiety,
        glyph: "🟡",
        base_intensity: 2,
        keywords: &[
            "ansiedad", "ansioso", "ansiosa", "nervioso", "nerviosa",
            "preocupado", "preocupada", "preocupación", "estrés", "estresado",
            "estresada", "tensión", "tenso", "tensa", "miedo", "pánico",
            "asustado", "asustada", "inquieto", "inquieta", "intranquilo",
            "agitado", "agitada", "acelerado", "palpitaciones", "temor",
            "terror", "fobia", "angustiado", "angustiada", "presionado",
            "presionada", "cansado", "cansada", "agobiado", "agobiada",
            "desasosiego", "desazón", "zozobra", "inquietud",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Anger,
        glyph: "🔴",
        base_intensity: 2,
        keywords: &[
            "enojo", "enojado", "furioso", "rabia", "rabioso", "ira",
            "irritado", "molesto", "enfadado", "bravo", "indignado",
            "ofendido", "furor", "cólera", "colérico", "agresivo", "violento",
            "me revienta", "me irrita", "fuera de sí", "harto", "fastidiado",
            "exasperado", "resentido", "amargado", "hostil", "desprecio",
            "rencor", "enfurecido", "provocado", "ultrajado", "indignación",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Calm,
        glyph: "🟣",
        base_intensity: -2,
        keywords: &[
            "calma", "calmado", "tranquilo", "paz", "sereno", "relajado",
            "descansado", "sosegado", "apacible", "quieto", "plácido",
            "armonía", "equilibrio", "estabilidad", "meditación", "yoga",
            "respiro", "respiro profundo", "tranquilidad", "serenidad",
            "sosiego", "serena", "paciencia", "placidez", "reposo", "descanso",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Hope,
        glyph: "✨",
        base_intensity: 1,
        keywords: &[
            "esperanza", "esperanzado", "optimista", "optimismo", "confianza",
            "seguro", "confío", "confidente", "futuro", "posibilidad",
            "oportunidad", "progreso", "mejora", "cambio positivo", "creo",
            "fe", "espero", "quiero", "voy a lograr", "puedo", "seré",
            "creencia", "aspiración", "ilusión", "motivación", "determinación",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Loneliness,
        glyph: "⚫",
        base_intensity: -3,
        keywords: &[
            "solo", "soledad", "abandonado", "aislado", "rechazado",
            "excluido", "incomprendido", "marginal", "desconectado",
            "apartado", "segregado", "nadie entiende", "me siento solo",
            "todos contra mí", "sin apoyo", "desamparado", "desprotegido",
            "olvidado", "ignorado", "invisible", "aislamiento", "desamparo",
            "alejamiento", "desvinculado",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Guilt,
        glyph: "🟤",
        base_intensity: -2,
        keywords: &[
            "culpa", "culpable", "arrepentido", "remordimiento", "vergüenza",
            "avergonzado", "humillado", "culpabilidad", "responsable",
            "mi culpa", "debería haber", "no debería", "cometí", "errores",
            "mal", "fracaso", "decepción", "fallé", "me siento mal",
            "no meresco", "reprobación", "autocrítica", "autocondena",
            "contricción", "penitencia",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Confusion,
        glyph: "🟠",
        base_intensity: 0,
        keywords: &[
            "confundido", "confusión", "desorientado", "perdido",
            "sin dirección", "incierto", "incertidumbre", "dudoso", "duda",
            "no sé", "no entiendo", "complicado", "complejo", "lío",
            "desorden", "caos", "caótico", "desconcierto", "aturdido",
            "atolondrado", "turbación", "perplejidad", "desvarío", "desvario",
            "ambigüedad", "vaguedad",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Love,
        glyph: "💕",
        base_intensity: 1,
        keywords: &[
            "amor", "amar", "amado", "amada", "cariño", "cariñoso", "afecto",
            "afectuoso", "querido", "querida", "apasionado", "apasionada",
            "enamorado", "enamorada", "pasión", "adoración", "devoción",
            "ternura", "dulzura", "romanticismo", "conexión", "vínculo",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Pride,
        glyph: "🏆",
        base_intensity: 1,
        keywords: &[
            "orgullo", "orgulloso", "orgullosa", "satisfecho", "satisfecha",
            "logro", "éxito", "victoria", "triunfo", "campeón", "ganador",
            "superioridad", "dignidad", "honra", "honor", "gloria",
            "grandiosidad", "magnificencia", "prepotencia", "vanidad",
            "altivez",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Shame,
        glyph: "😳",
        base_intensity: -2,
        keywords: &[
            "vergüenza", "avergonzado", "avergonzada", "humillación",
            "humillante", "deshonra", "deshonroso", "ignominia", "oprobio",
            "bochorno", "rubor", "sonrojarse", "apocado", "acobardado",
            "tímido", "timidez", "bajeza", "indignidad", "descrédito",
            "infamia",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Admiration,
        glyph: "😲",
        base_intensity: 1,
        keywords: &[
            "admiración", "admirar", "admirado", "admirada", "asombro",
            "asombrado", "maravillado", "maravillada", "fascinación",
            "fascinante", "cautivador", "sorprendente", "impresionante",
            "impresionado", "reverencia", "veneración", "respeto",
            "estupefacto", "pasmado",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Disgust,
        glyph: "🤢",
        base_intensity: -2,
        keywords: &[
            "asco", "asqueado", "asqueada", "repugnancia", "repugnante",
            "repulsivo", "nauseabundo", "detestable", "odio",
            "aborrecimiento", "aversión", "desagrado", "desagradable",
            "grotesco", "inmundo", "inmundicia", "impureza", "vileza",
            "ordinariez", "tosquedad",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Surprise,
        glyph: "🎉",
        base_intensity: 0,
        keywords: &[
            "sorpresa", "sorprendente", "sorprendido", "sorprendida",
            "asombroso", "imprevisto", "inesperado", "casual",
            "fortuitamente", "de repente", "de pronto", "improviso",
            "sorpresiva", "alerta", "atento", "cauteloso", "expectativa",
            "suspense", "intriga",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Fear,
        glyph: "😨",
        base_intensity: 2,
        keywords: &[
            "miedo", "asustado", "asustada", "aterrado", "aterrada",
            "espanto", "espantado", "espantada", "pánico", "pánicamente",
            "fobias", "terror", "terrorífico", "aterrador", "pavor", "pávor",
            "escalofría", "temblor", "tiritón", "cobardía", "medroso",
            "temeroso",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Gratitude,
        glyph: "🙏",
        base_intensity: 1,
        keywords: &[
            "gratitud", "agradecido", "agradecida", "gracias", "apreciación",
            "apreciativo", "apreciativa", "reconocimiento", "reconocido",
            "reconocida", "deuda", "favor", "bendición", "fortuna", "suerte",
            "privilegio", "beneficio", "bien", "gentileza", "amabilidad",
            "benevolencia",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Frustration,
        glyph: "😤",
        base_intensity: -1,
        keywords: &[
            "frustración", "frustrado", "frustrada", "decepción",
            "decepcionado", "decepcionada", "fracaso", "fracasado",
            "fracasada", "impedimento", "obstáculo", "barrera", "bloqueo",
            "impotencia", "impotente", "incapaz", "derrota", "revés",
            "contratiempo", "tropiezo", "desventura",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Nostalgia,
        glyph: "💭",
        base_intensity: -1,
        keywords: &[
            "nostalgia", "nostálgico", "nostálgica", "añoranza", "añorar",
            "recuerdo", "pasado", "antaño", "tiempos lejanos",
            "buenos tiempos", "melancolía", "evocación", "remembranza",
            "reminiscencia", "ausencia", "vacío", "anhelo", "deseo",
            "suspiro",
        ],
    },
    EmotionDef {
        label: EmotionLabel::QuietJoy,
        glyph: "😊",
        base_intensity: 1,
        keywords: &[
            "sonrisa", "sonreír", "sonriente", "humor", "cómico", "bromista",
            "jocoso", "jocosidad", "hilaridad", "diversión",
            "entretenimiento", "placer", "deleite", "regocijo", "júbilo",
            "dicha", "felicidad",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Compassion,
        glyph: "💚",
        base_intensity: -1,
        keywords: &[
            "compasión", "compasivo", "compasiva", "empatía", "empático",
            "empática", "solidaridad", "solidario", "solidaria", "lástima",
            "pena", "duelo", "piedad", "misericordia", "clemencia",
            "altruismo", "filantropía", "benignidad", "bondad", "humanidad",
            "ternura", "dulzura",
        ],
    },
    EmotionDef {
        label: EmotionLabel::AnticipatoryAnxiety,
        glyph: "⏰",
        base_intensity: 1,
        keywords: &[
            "anticipación", "anticipado", "anticipada", "expectativa",
            "expectante", "ansia", "ansias", "aprehensión", "inquietud",
            "desasosiego", "desazón", "zozobra", "presentimiento",
            "premonición", "mal presagio", "premonitorio", "próximo",
            "venidero", "futuro", "inminente",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Empowerment,
        glyph: "💪",
        base_intensity: 1,
        keywords: &[
            "empoderamiento", "empoderado", "empoderada", "fortaleza",
            "fuerza", "poder", "capacidad", "habilidad", "dominio",
            "control", "autoridad", "liderazgo", "lider", "decidido",
            "decidida", "resuelto", "determinación", "voluntad",
            "autodeterminación", "autonomía",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Emptiness,
        glyph: "🕳️",
        base_intensity: -2,
        keywords: &[
            "vacío", "vacía", "nada", "nada importa", "nihilismo",
            "nihilista", "falta de sentido", "sinsentido", "propósito",
            "significado", "insignificancia", "insignificante", "futilidad",
            "insubstancial", "vano", "intangible", "inaprehensible",
            "inexistencia", "inexistente",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Relief,
        glyph: "😌",
        base_intensity: -1,
        keywords: &[
            "alivio", "aliviado", "aliviada", "desahogo", "respiro",
            "aligerar", "aligerado", "aligerada", "liberación", "liberado",
            "liberada", "descarga", "descargado", "descargada", "libertad",
            "emancipación", "redención", "salvación", "consuelo",
            "consolación", "sosiego",
        ],
    },
    EmotionDef {
        label: EmotionLabel::Resentment,
        glyph: "😠",
        base_intensity: -2,
        keywords: &[
            "resentimiento", "resentido", "resentida", "rencor", "rencoroso",
            "amargura", "amargado", "amargada", "mala voluntad", "rencilla",
            "animosidad", "hostilidad", "enemistad", "antagonismo",
            "oposición", "acritud", "severidad", "dureza", "despecho",
            "ofensa",
        ],
    },
];
