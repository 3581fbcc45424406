//! Support-session guidance and conversational opening lines.
//!
//! The session text is the longer-form, multi-bullet guidance a
//! conversational front-end appends below the recommendation; which block
//! applies is purely a function of the session tier.

use sereno_domain::{EmotionLabel, SessionTier};

const CRITICAL_SESSION: &str = "\
⚠️ SESIÓN DE APOYO - ESTRÉS CRÍTICO
Tu nivel de estrés es muy alto. Aquí te ofrezco apoyo inmediato:

🧘 Técnica de respiración 4-4-4:
  1. Inhala profundamente por la nariz durante 4 segundos
  2. Sostén la respiración durante 4 segundos
  3. Exhala lentamente por la boca durante 4 segundos
  4. Repite 5-10 veces

💪 Acciones para ahora:
  • Tómate 5 minutos de pausa
  • Camina o muévete suavemente
  • Bebe agua

⚠️ Recursos de urgencia:
  Si la situación empeora, busca ayuda profesional de inmediato
  Línea de crisis: Disponible 24/7";

const MODERATE_SESSION: &str = "\
⚡ SESIÓN DE APOYO - ESTRÉS MODERADO
Tu nivel de estrés es moderado. Aquí hay acciones que pueden ayudarte:

🧘 Técnicas de relajación:
  • Meditación guiada (10 minutos)
  • Ejercicio físico ligero (yoga, caminata)
  • Música relajante o sonidos de la naturaleza

🤝 Apoyo social:
  • Conecta con un amigo cercano
  • Comparte tus sentimientos con alguien de confianza
  • Considera hablar con un terapeuta

📝 Estrategias de autocuidado:
  • Crea una rutina diaria de autosanación
  • Establece límites saludables
  • Dedica tiempo a actividades que disfrutes";

const PREVENTIVE_SESSION: &str = "\
✅ SESIÓN DE APOYO - BIENESTAR SOSTENIBLE
Tu nivel de estrés está bajo. Mantén este bienestar:

🌟 Clave para mantener la paz:
  • Continúa con las actividades que te hacen feliz
  • Cultiva conexiones positivas
  • Practica gratitud diariamente
  • Cuida tu sueño y alimentación

💡 Para prevenir crisis futuras:
  • Identifica tus disparadores emocionales
  • Construye una red de apoyo sólida
  • Desarrolla habilidades de resiliencia";

/// Long-form guidance for a session tier.
pub fn support_session(tier: SessionTier) -> &'static str {
    match tier {
        SessionTier::Critical => CRITICAL_SESSION,
        SessionTier::Moderate => MODERATE_SESSION,
        SessionTier::Preventive => PREVENTIVE_SESSION,
    }
}

/// Empathetic opener for the detected dominant emotion.
///
/// Only the most frequent outcomes have a dedicated line; the rest share a
/// generic acknowledgment. `None` is the neutral outcome.
pub fn opening_line(emotion: Option<EmotionLabel>) -> &'static str {
    let Some(emotion) = emotion else {
        return "Gracias por compartir conmigo. Aquí estoy para apoyarte. 👂";
    };

    match emotion {
        EmotionLabel::Joy => "¡Me alegra mucho escuchar eso! 😊 Tu energía positiva es contagiosa.",
        EmotionLabel::Sadness => {
            "Entiendo que estés pasando por un momento difícil. 💙 Aquí estoy para escucharte."
        }
        EmotionLabel::Anxiety => {
            "Detecté algo de preocupación en tu mensaje. Respira profundo, esto es importante. 🧘"
        }
        EmotionLabel::Anger => {
            "Parece que hay frustración. Está bien sentir esto. 💪 Hablemos al respecto."
        }
        EmotionLabel::Calm => "Noto que te sientes en paz. ¡Que bonito! Mantén esa armonía. ✨",
        EmotionLabel::Hope => "Veo optimismo en tus palabras. ¡Excelente! Confía en ti. 🎯",
        EmotionLabel::Loneliness => {
            "No estás solo/a. Muchas personas sienten lo mismo. Te estoy escuchando. 🤝"
        }
        EmotionLabel::Guilt => "Es humano sentir culpa. Lo importante es aprender y crecer. 🌱",
        EmotionLabel::Confusion => {
            "Veo que hay incertidumbre. No te preocupes, lo aclararemos juntos. 💭"
        }
        _ => "Te entiendo perfectamente.",
    }
}
