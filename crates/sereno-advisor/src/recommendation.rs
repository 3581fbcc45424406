//! Recommendation lookup: one fixed template per (emotion, stress tier).

use sereno_domain::{EmotionLabel, SessionTier, StressTier};

/// Fallback for emotion labels with no table entry.
pub const GENERIC_FALLBACK: &str = "Estamos aquí para apoyarte en tu bienestar emocional. 💙";

/// Prompt returned for empty or whitespace-only input.
pub const EMPTY_INPUT_PROMPT: &str =
    "Por favor escribe algo para que analicemos tu estado emocional.";

/// Advice produced for one analysis outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Localized advice text
    pub text: String,

    /// Support-session classification for the stress level
    pub session: SessionTier,
}

/// Produce the recommendation for a dominant emotion and stress level.
///
/// `None` stands for the neutral outcome, which carries its own three-tier
/// entries. This function is total: every (emotion, tier) pair resolves to
/// a template.
pub fn recommend(emotion: Option<EmotionLabel>, stress_level: f64) -> Recommendation {
    let tier = StressTier::from_level(stress_level);
    Recommendation {
        text: recommendation_text(emotion, tier, stress_level),
        session: tier.into(),
    }
}

/// Produce the recommendation for a label carried as text.
///
/// Intended for callers that persisted an analysis and kept only the
/// string form. Unknown labels resolve to the generic supportive fallback;
/// this never fails.
pub fn recommend_label(label: &str, stress_level: f64) -> Recommendation {
    if label.to_lowercase() == "neutral" {
        return recommend(None, stress_level);
    }
    match EmotionLabel::parse(label) {
        Some(emotion) => recommend(Some(emotion), stress_level),
        None => Recommendation {
            text: GENERIC_FALLBACK.to_string(),
            session: SessionTier::from_level(stress_level),
        },
    }
}

fn recommendation_text(
    emotion: Option<EmotionLabel>,
    tier: StressTier,
    stress_level: f64,
) -> String {
    use EmotionLabel::*;
    use StressTier::{High, Low, Moderate};

    let Some(emotion) = emotion else {
        return match tier {
            Low => "Estás en un lugar neutral. Cuéntame más para ayudarte mejor. 👂",
            Moderate => "Parece que hay equilibrio. ¿Hay algo específico que quieras compartir? Estoy aquí. 🎧",
            High => "Busco comprenderte mejor. ¿Cómo te sientes realmente? Dime más. 💬",
        }
        .to_string();
    };

    // The anxiety and fear entries embed the measured stress level; every
    // other template is fixed text.
    match (emotion, tier) {
        (Anxiety, Moderate) => {
            return format!(
                "Detectamos ansiedad moderada (Estrés: {:.1}/10). Practica técnicas de mindfulness o camina en la naturaleza. 🌿",
                stress_level
            );
        }
        (Anxiety, High) => {
            return format!(
                "Tu nivel de ansiedad es alto (Estrés: {:.1}/10). Tómate tiempo para relajarte. Considera meditación o busca apoyo profesional. 🕯️",
                stress_level
            );
        }
        (Fear, High) => {
            return format!(
                "Tu miedo es intenso (Estrés: {:.1}/10). Busca apoyo. Habla con alguien. No tienes que enfrentar esto solo. 🤝",
                stress_level
            );
        }
        _ => {}
    }

    match (emotion, tier) {
        (Joy, Low) => "¡Qué alegría! Disfruta este momento de felicidad. Considera hacer algo especial que amplíe tu sonrisa. 😊",
        (Joy, Moderate) => "¡Excelente! Tu energía positiva es contagiosa. Comparte tu felicidad con quienes te rodean. 🌟",
        (Joy, High) => "¡Estás radiante! Aprovecha esta euforia para alcanzar tus metas. ¡El mundo está a tu alcance! 🚀",

        (Sadness, Low) => "Parece que hay algo que pesa en tu corazón. Habla con alguien de confianza sobre lo que sientes. 💙",
        (Sadness, Moderate) => "Atraviesas un momento difícil. Recuerda que es temporal. Busca actividades que te traigan paz y conexión. 🌸",
        (Sadness, High) => "Tu dolor es válido. Considera buscar apoyo profesional si lo necesitas. Mereces estar bien. 🤝",

        (Anxiety, Low) => "Algo te preocupa un poco. Respira profundamente. Inhala 4 segundos, sostén 4, exhala 4. 🧘",
        (Anxiety, _) => unreachable!("parameterized entries handled above"),

        (Anger, Low) => "Hay algo que te molesta. Es normal. Respira y piensa en qué puedes cambiar de la situación. 💭",
        (Anger, Moderate) => "Siento tu frustración. Canaliza esa energía en algo productivo: ejercicio, arte o una conversación honesta. 💪",
        (Anger, High) => "Tu rabia es comprensible. Tómate tiempo para enfriarte. Luego, verás la situación con más claridad. 🔥➡️❄️",

        (Calm, Low) => "Mantén esta paz. Es un tesoro. Sigue con las actividades que te generan serenidad. ✨",
        (Calm, Moderate) => "¡Qué equilibrio! Tu bienestar es excelente. Continúa cuidándote así. 🧘‍♀️",
        (Calm, High) => "Tu paz interior es hermosa. Comparte esta tranquilidad con otros. Eres un ejemplo de serenidad. 🕊️",

        (Hope, Low) => "Pequeñas luces de esperanza siempre iluminan el camino. Alimenta esa confianza. 💡",
        (Hope, Moderate) => "¡Qué actitud positiva! Tu confianza es tu fortaleza. Continúa adelante con determinación. 🎯",
        (Hope, High) => "¡Tu optimismo es inspirador! Cree en ti mismo. Los sueños se hacen realidad con fe y acción. ⭐",

        (Loneliness, Low) => "A veces necesitamos soledad para reflexionar. Eso está bien. Pero recuerda que puedes conectar cuando lo necesites. 📞",
        (Loneliness, Moderate) => "Te sientes un poco aislado. Llama a un amigo, únete a un grupo o actividad que disfrutes. 🤝",
        (Loneliness, High) => "Tu soledad pesa. Busca conexión genuina. Comunidades en línea, grupos de interés, o profesionales pueden ayudarte. 💙",

        (Guilt, Low) => "Una lección valiosa viene con la culpa. Aprende de ella y perdónate. 🌱",
        (Guilt, Moderate) => "La culpa nos enseña. Reflexiona sobre qué pasó y cómo puedes mejorar. El perdón propio es clave. 🕯️",
        (Guilt, High) => "Tu culpa es profunda. Considera hablar con alguien de confianza o buscar asesoría. Mereces paz. 💙",

        (Confusion, Low) => "Hay algo poco claro. Tómate tiempo para pensar. A menudo la claridad llega con la reflexión. 💭",
        (Confusion, Moderate) => "Parece que hay incertidumbre. Divide tus preocupaciones en pasos pequeños. Habla con alguien sabio. 📝",
        (Confusion, High) => "Te sientes perdido. Es normal. Busca consejo, estructura tu pensamiento, y un paso a la vez. 🧭",

        (Love, Low) => "Hay amor en tu corazón. Cultívalo en ti y en tus relaciones. 💕",
        (Love, Moderate) => "¡Qué hermoso! Estás en un estado de afecto y conexión. Valora esos vínculos especiales. 💑",
        (Love, High) => "¡Tu corazón está lleno de amor! Es el combustible más hermoso. Expresa ese sentimiento. 💖",

        (Pride, Low) => "Reconoce tus logros. Mereces celebrar lo que has alcanzado. 🏅",
        (Pride, Moderate) => "¡Estás orgulloso de ti! Ese sentimiento es saludable. Mantén humildad también. 🏆",
        (Pride, High) => "Tu autoestima es fuerte. Recuerda que nadie es perfecto. La humildad suma junto al orgullo. 👑",

        (Shame, Low) => "Algo te avergüenza. Recuerda que los errores nos hacen humanos. Puedes aprender de esto. 🌱",
        (Shame, Moderate) => "Sientes vergüenza. Es una emoción válida pero no te define. Perdónate y sigue adelante. 🤗",
        (Shame, High) => "Tu vergüenza es intensa. Habla con alguien. No estás solo. Mereces compasión, incluso de ti mismo. 💙",

        (Admiration, Low) => "Encuentras inspiración en otros. Eso es hermoso. Aprende y crece. 📚",
        (Admiration, Moderate) => "Admiras profundamente. Deja que inspire tu propio crecimiento. 🌟",
        (Admiration, High) => "Tu admiración es encendida. Busca ser tú también una inspiración para otros. 🦸",

        (Disgust, Low) => "Algo no te agrada. Está bien alejarte de ello. Enfócate en lo que sí te importa. 🚶",
        (Disgust, Moderate) => "Tienes una aversión clara. Honra ese instinto. Tu intuición te protege. ⚠️",
        (Disgust, High) => "Algo te repugna profundamente. Tómate distancia si es posible. Tu bienestar primero. 🛡️",

        (Surprise, Low) => "Algo inesperado pasó. Tómate un momento para procesar. 🤔",
        (Surprise, Moderate) => "¡Qué sorpresa! A menudo traen oportunidades. Mantén la mente abierta. 🎁",
        (Surprise, High) => "¡Impresionado! Los giros inesperados pueden llevar a cosas extraordinarias. Adapta y fluye. 🌀",

        (Fear, Low) => "Algo te asusta un poco. Es natural tener miedo. Respira y pregúntate: ¿qué es lo peor que podría pasar? 🧘",
        (Fear, Moderate) => "El miedo está presente. Enfrentarlo poco a poco reduce su poder. Avanza con cautela. 🪜",
        (Fear, High) => unreachable!("parameterized entry handled above"),

        (Gratitude, Low) => "Pequeñas cosas por las que agradecer enriquecen la vida. Reconócelas. 🙏",
        (Gratitude, Moderate) => "Tu gratitud es hermosa. Cultívala. Transforma perspectivas hacia lo positivo. ✨",
        (Gratitude, High) => "¡Tu gratitud es radiante! Comparte ese agradecimiento. Inspira a otros a valorar lo que tienen. 💛",

        (Frustration, Low) => "Algo no sale como planeado. Respira. A menudo es temporal. 🌬️",
        (Frustration, Moderate) => "La frustración es una señal. ¿Qué necesitas cambiar? Actúa o acepta lo que no puedes cambiar. 🎯",
        (Frustration, High) => "Tu frustración es profunda. Tómate un descanso. Luego busca una estrategia diferente. 🔄",

        (Nostalgia, Low) => "Recuerdas buenos momentos. Está bien. Aprecia la memoria. 🌅",
        (Nostalgia, Moderate) => "Te atrae el pasado. Valora esos recuerdos pero vive el presente también. ⏳",
        (Nostalgia, High) => "Estás muy apegado al pasado. Intenta crear nuevos buenos momentos ahora. El presente también merece tu atención. 📷",

        (QuietJoy, Low) => "Hay alegría discreta. A veces eso es más profundo. Valóralo. 😊",
        (QuietJoy, Moderate) => "¡Sonríes genuinamente! Eso es verdadera felicidad sostenida. Mantén eso. 😄",
        (QuietJoy, High) => "Tu risa es contagiosa. Crea momentos para mantener esa ligereza. ¡Necesitamos más de esto! 🎉",

        (Compassion, Low) => "Tu compasión es hermosa. Cultívala hacia otros y hacia ti. 🌷",
        (Compassion, Moderate) => "¡Qué corazón compasivo tienes! Ayuda a otros sin olvidarte de ti mismo. ⚖️",
        (Compassion, High) => "Tu compasión es radiante. Recuerda: también mereces compasión de ti mismo. Autobien es cuidado. 💚",

        (AnticipatoryAnxiety, Low) => "Algo te preocupa del futuro. Recuerda que mañana aún no llega. Vive hoy. 🌞",
        (AnticipatoryAnxiety, Moderate) => "Anticipas eventos futuros con ansiedad. Prepárate pero no obsesiones. Confía en tu capacidad. 🎒",
        (AnticipatoryAnxiety, High) => "Tu ansiedad por el futuro es alta. Vuelve al presente. Práctica grounding: 5 cosas que ves, 4 que tocas... 🧊",

        (Empowerment, Low) => "Empiezas a creer en ti. Cultiva ese poder interno. 💪",
        (Empowerment, Moderate) => "¡Te sientes fuerte! Esa confianza es tu mayor activo. Úsala sabiamente. ⚡",
        (Empowerment, High) => "¡Tu empoderamiento es inspirador! Guía a otros también. Eres más fuerte de lo que sabes. 🔥",

        (Emptiness, Low) => "Sientes un vacío pequeño. A menudo significa que falta algo significativo. Reflexiona qué. 🔍",
        (Emptiness, Moderate) => "Hay vacío en ti. Busca propósito, conexión, significado. Llena tu vida de lo que importa. 🎨",
        (Emptiness, High) => "Tu vacío es profundo. Habla con un profesional. Mereces encontrar significado y luz. 🌟",

        (Relief, Low) => "Algo mejoró un poco. Continúa adelante con esa paz. 😌",
        (Relief, Moderate) => "¡Qué alivio! Disfruta este descanso. Lo merecías. 🙌",
        (Relief, High) => "¡Tu alivio es palpable! Parece que una carga se quitó. Tómate un momento para recuperarte. 🍃",

        (Resentment, Low) => "Hay un poco de amargura. Considera perdonar para liberarte. 🕊️",
        (Resentment, Moderate) => "El resentimiento te pesa. Recuerda: perdonar no es olvidar, es liberarse. 💫",
        (Resentment, High) => "Tu resentimiento es profundo. Busca ayuda profesional para sanarlo. Mereces paz. 🩹",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_tier_tracks_stress_level() {
        assert_eq!(
            recommend(Some(EmotionLabel::Joy), 1.0).session,
            SessionTier::Preventive
        );
        assert_eq!(
            recommend(Some(EmotionLabel::Joy), 4.0).session,
            SessionTier::Moderate
        );
        assert_eq!(
            recommend(Some(EmotionLabel::Joy), 9.0).session,
            SessionTier::Critical
        );
    }

    #[test]
    fn test_parameterized_templates_embed_stress_level() {
        let rec = recommend(Some(EmotionLabel::Anxiety), 4.25);
        assert!(rec.text.contains("4.2"), "got: {}", rec.text);

        let rec = recommend(Some(EmotionLabel::Fear), 8.0);
        assert!(rec.text.contains("8.0"), "got: {}", rec.text);
    }

    #[test]
    fn test_every_pair_has_a_template() {
        for label in EmotionLabel::ALL {
            for level in [1.0, 5.0, 9.0] {
                let rec = recommend(Some(label), level);
                assert!(!rec.text.is_empty());
                assert_ne!(rec.text, GENERIC_FALLBACK);
            }
        }
    }

    #[test]
    fn test_neutral_has_own_entries() {
        let low = recommend(None, 1.0);
        let high = recommend(None, 9.0);
        assert_ne!(low.text, high.text);
        assert_ne!(low.text, GENERIC_FALLBACK);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let rec = recommend_label("melancolía profunda", 5.0);
        assert_eq!(rec.text, GENERIC_FALLBACK);
        assert_eq!(rec.session, SessionTier::Moderate);
    }

    #[test]
    fn test_label_round_trip_matches_typed_path() {
        let typed = recommend(Some(EmotionLabel::Sadness), 7.0);
        let stringly = recommend_label("tristeza", 7.0);
        assert_eq!(typed, stringly);
    }

    #[test]
    fn test_neutral_label_string() {
        let typed = recommend(None, 2.0);
        let stringly = recommend_label("neutral", 2.0);
        assert_eq!(typed, stringly);
    }
}
